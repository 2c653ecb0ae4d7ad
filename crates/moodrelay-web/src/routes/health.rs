//! Health route handler.

use axum::{extract::State, Json};
use serde_json::{json, Map, Value};

use crate::state::AppState;

/// GET /api/health - Report which providers have credentials.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let providers: Map<String, Value> = state
        .analyzer
        .providers()
        .map(|provider| {
            (
                provider.kind().display_name().to_string(),
                json!({ "configured": provider.is_configured() }),
            )
        })
        .collect();

    Json(json!({ "status": "ok", "providers": providers }))
}
