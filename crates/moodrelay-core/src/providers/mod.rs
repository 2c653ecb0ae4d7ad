//! Vendor adapters.
//!
//! Each adapter turns `(text, tone)` into one HTTP POST against its vendor,
//! pulls the generated text out of the reply and hands it to
//! [`crate::prompt::parse_reply`].

pub mod deepseek;
pub mod gemini;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::{ConfigError, ProviderError, ProviderResult};
use crate::model::{AnalysisOutcome, ProviderKind};

pub use deepseek::DeepseekProvider;
pub use gemini::GeminiProvider;

/// A text-analysis vendor behind a uniform interface.
#[async_trait]
pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether a credential is available. Unconfigured providers still accept
    /// calls and fail them without touching the network.
    fn is_configured(&self) -> bool;

    async fn analyze(&self, text: &str, tone: &str) -> ProviderResult<AnalysisOutcome>;
}

/// Build the shared HTTP client.
pub fn build_client(config: &RelayConfig) -> Result<reqwest::Client, ConfigError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Construct every provider from the configuration, in call order.
pub fn build_providers(config: &RelayConfig) -> Result<Vec<Arc<dyn Provider>>, ConfigError> {
    let client = build_client(config)?;
    let gemini: Arc<dyn Provider> =
        Arc::new(GeminiProvider::new(client.clone(), config.gemini.clone()));
    let deepseak: Arc<dyn Provider> =
        Arc::new(DeepseekProvider::new(client, config.deepseak.clone()));
    Ok(vec![gemini, deepseak])
}

/// Send a prepared request and decode the vendor envelope.
///
/// Non-success statuses become [`ProviderError::Api`]; a body that does not
/// match `T` becomes [`ProviderError::UnexpectedFormat`].
pub(crate) async fn send<T: DeserializeOwned>(
    provider: ProviderKind,
    request: reqwest::RequestBuilder,
) -> ProviderResult<T> {
    let response = request
        .send()
        .await
        .map_err(|source| ProviderError::Http { provider, source })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ProviderError::Http { provider, source })?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    debug!(%provider, status = status.as_u16(), bytes = body.len(), "Received vendor reply");

    serde_json::from_str(&body).map_err(|_| ProviderError::UnexpectedFormat { provider })
}
