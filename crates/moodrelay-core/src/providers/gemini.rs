//! Gemini `generateContent` adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{send, Provider};
use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::model::{AnalysisOutcome, ProviderKind};
use crate::prompt::{build_prompt, parse_reply};

const KIND: ProviderKind = ProviderKind::Gemini;

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.config.endpoint, self.config.model)
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        KIND
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn analyze(&self, text: &str, tone: &str) -> ProviderResult<AnalysisOutcome> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured { provider: KIND })?;

        let prompt = build_prompt(text, tone);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        debug!(model = %self.config.model, "Calling Gemini");

        let reply: GenerateResponse = send(
            KIND,
            self.client
                .post(self.url())
                .header("x-goog-api-key", api_key)
                .json(&request),
        )
        .await?;

        let text = reply
            .into_text()
            .ok_or(ProviderError::UnexpectedFormat { provider: KIND })?;

        Ok(parse_reply(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const PATH: &str = "/models/test-model:generateContent";

    fn provider(url: &str, key: Option<&str>) -> GeminiProvider {
        GeminiProvider::new(
            reqwest::Client::new(),
            ProviderConfig::new(key.map(str::to_string), url, "test-model"),
        )
    }

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_structured_reply() {
        let mut server = Server::new_async().await;
        let reply = r#"{"mood":"distressed","emotions":["sadness","anxiety","fear"],"suggestedResponse":"I'm sorry to hear that.","writingStyle":"concise, emotional"}"#;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "secret")
            .match_body(Matcher::PartialJson(json!({
                "contents": [{ "parts": [{ "text": build_prompt("I lost my job today", "supportive") }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(reply))
            .create_async()
            .await;

        let outcome = provider(&server.url(), Some("secret"))
            .analyze("I lost my job today", "supportive")
            .await
            .unwrap();

        mock.assert_async().await;
        let AnalysisOutcome::Structured(fields) = outcome else {
            panic!("expected structured outcome");
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::from_str::<serde_json::Value>(reply).unwrap()
        );
    }

    #[tokio::test]
    async fn test_raw_reply() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(envelope("Sounds like a rough day."))
            .create_async()
            .await;

        let outcome = provider(&server.url(), Some("secret"))
            .analyze("meh", "neutral")
            .await
            .unwrap();

        assert_eq!(outcome, AnalysisOutcome::Raw("Sounds like a rough day.".to_string()));
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body("server overloaded")
            .create_async()
            .await;

        let err = provider(&server.url(), Some("secret"))
            .analyze("hello", "empathetic")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Gemini API error: 500 - server overloaded");
    }

    #[tokio::test]
    async fn test_missing_candidates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string())
            .create_async()
            .await;

        let err = provider(&server.url(), Some("secret"))
            .analyze("hello", "empathetic")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::UnexpectedFormat { .. }));
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let err = provider(&server.url(), None)
            .analyze("hello", "empathetic")
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(err.to_string().contains("not configured"));
    }
}
