//! Centralized error types for MoodRelay.

use thiserror::Error;

use crate::model::ProviderKind;

/// Failure of a single provider call.
///
/// These never abort a request: the analyzer renders them into the
/// provider's slot of the aggregated response.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{} API key not configured", .provider.vendor_name())]
    NotConfigured { provider: ProviderKind },

    #[error("{} API error: {status} - {body}", .provider.vendor_name())]
    Api {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    #[error("Unexpected response format from {} API", .provider.vendor_name())]
    UnexpectedFormat { provider: ProviderKind },

    #[error("{} request failed: {source}", .provider.vendor_name())]
    Http {
        provider: ProviderKind,
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// The provider that produced this error.
    pub fn provider(&self) -> ProviderKind {
        match self {
            Self::NotConfigured { provider }
            | Self::Api { provider, .. }
            | Self::UnexpectedFormat { provider }
            | Self::Http { provider, .. } => *provider,
        }
    }
}

/// Configuration errors raised while assembling the relay at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_message() {
        let err = ProviderError::NotConfigured {
            provider: ProviderKind::Deepseak,
        };
        assert_eq!(err.to_string(), "DeepSeek API key not configured");
        assert_eq!(err.provider(), ProviderKind::Deepseak);
    }

    #[test]
    fn test_api_error_message() {
        let err = ProviderError::Api {
            provider: ProviderKind::Gemini,
            status: 500,
            body: "server overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error: 500 - server overloaded");
    }

    #[test]
    fn test_unexpected_format_message() {
        let err = ProviderError::UnexpectedFormat {
            provider: ProviderKind::Gemini,
        };
        assert_eq!(err.to_string(), "Unexpected response format from Gemini API");
    }
}
