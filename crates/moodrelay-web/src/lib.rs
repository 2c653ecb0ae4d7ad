//! MoodRelay Web Server
//!
//! Axum-based server exposing the analysis API and the static front end.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use moodrelay_core::Analyzer;
use std::path::{Path, PathBuf};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use error::ApiError;
use state::AppState;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for static assets.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .route("/health", get(routes::health::health))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(analyzer: Analyzer, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::new(analyzer), &config.public_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(public_dir = %config.public_dir.display(), "Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
