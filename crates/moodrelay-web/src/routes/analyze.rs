//! Analysis route handler.

use axum::{body::Bytes, extract::State, Json};
use moodrelay_core::{AggregatedResponse, ProviderSelection, DEFAULT_TONE};
use serde::Deserialize;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub providers: Option<ProviderSelection>,
    pub tone: Option<String>,
}

impl AnalysisRequest {
    /// Read a request body. An empty body is treated as an empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    pub fn tone(&self) -> &str {
        self.tone.as_deref().unwrap_or(DEFAULT_TONE)
    }
}

/// POST /api/analyze - Run the selected providers over the submitted text.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AggregatedResponse>, ApiError> {
    let req = AnalysisRequest::from_body(&body).map_err(|e| {
        error!(error = %e, "Failed to read analysis request");
        ApiError::Internal
    })?;

    let text = req
        .text
        .as_deref()
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::MissingText)?;
    let selection = req.providers.unwrap_or_default();
    let tone = req.tone();

    let span = info_span!("analyze", request_id = %Uuid::new_v4());
    let response = async {
        info!(
            chars = text.chars().count(),
            tone,
            gemini = selection.gemini,
            deepseak = selection.deepseak,
            "Analysis requested"
        );
        state.analyzer.analyze(text, tone, selection).await
    }
    .instrument(span)
    .await;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_request() {
        let req = AnalysisRequest::from_body(b"  \n").unwrap();
        assert!(req.text.is_none());
        assert!(req.providers.is_none());
    }

    #[test]
    fn test_tone_default() {
        let req = AnalysisRequest::from_body(br#"{"text":"hi"}"#).unwrap();
        assert_eq!(req.tone(), DEFAULT_TONE);

        let req = AnalysisRequest::from_body(br#"{"text":"hi","tone":null}"#).unwrap();
        assert_eq!(req.tone(), DEFAULT_TONE);

        let req = AnalysisRequest::from_body(br#"{"text":"hi","tone":""}"#).unwrap();
        assert_eq!(req.tone(), "");

        let req = AnalysisRequest::from_body(br#"{"text":"hi","tone":"formal"}"#).unwrap();
        assert_eq!(req.tone(), "formal");
    }

    #[test]
    fn test_malformed_body() {
        assert!(AnalysisRequest::from_body(b"{not json").is_err());
        assert!(AnalysisRequest::from_body(br#"{"text": 42}"#).is_err());
    }
}
