//! DeepSeek chat completions adapter.
//!
//! Exposed to callers under the `deepseak` flag and `Deepseak` key.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{send, Provider};
use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::model::{AnalysisOutcome, ProviderKind};
use crate::prompt::{build_prompt, parse_reply};

const KIND: ProviderKind = ProviderKind::Deepseak;

/// DeepSeek API client.
#[derive(Clone)]
pub struct DeepseekProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// `choices[0].message.content`
    fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message?.content
    }
}

impl DeepseekProvider {
    pub fn new(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Provider for DeepseekProvider {
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
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        debug!(model = %self.config.model, "Calling DeepSeek");

        let reply: ChatResponse = send(
            KIND,
            self.client
                .post(format!("{}/chat/completions", self.config.endpoint))
                .bearer_auth(api_key)
                .json(&request),
        )
        .await?;

        let text = reply
            .into_text()
            .ok_or(ProviderError::UnexpectedFormat { provider: KIND })?;

        Ok(parse_reply(&text))
    }
}
