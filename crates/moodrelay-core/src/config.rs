//! Relay configuration.
//!
//! Built once at process start and handed to the provider constructors.
//! Adapters never read the environment themselves.

use std::time::Duration;

use crate::model::ProviderKind;

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default DeepSeek API base URL.
pub const DEFAULT_DEEPSEEK_URL: &str = "https://api.deepseek.com";

/// Default DeepSeek model.
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";

/// Connection settings for one vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
}

impl ProviderConfig {
    /// Create a provider config. Blank keys count as not configured.
    pub fn new(api_key: Option<String>, endpoint: &str, model: &str) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Defaults for `kind`, with the given key.
    pub fn default_for(kind: ProviderKind, api_key: Option<String>) -> Self {
        match kind {
            ProviderKind::Gemini => Self::new(api_key, DEFAULT_GEMINI_URL, DEFAULT_GEMINI_MODEL),
            ProviderKind::Deepseak => {
                Self::new(api_key, DEFAULT_DEEPSEEK_URL, DEFAULT_DEEPSEEK_MODEL)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Everything the analyzer needs to reach the vendors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub gemini: ProviderConfig,
    pub deepseak: ProviderConfig,
    /// Per-request timeout for vendor calls. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn provider(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::Deepseak => &self.deepseak,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            gemini: ProviderConfig::default_for(ProviderKind::Gemini, None),
            deepseak: ProviderConfig::default_for(ProviderKind::Deepseak, None),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = ProviderConfig::new(Some("  ".to_string()), "http://x/", "m");
        assert!(!config.is_configured());
        assert_eq!(config.endpoint, "http://x");
    }

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.provider(ProviderKind::Gemini).endpoint, DEFAULT_GEMINI_URL);
        assert_eq!(config.provider(ProviderKind::Deepseak).model, DEFAULT_DEEPSEEK_MODEL);
        assert!(!config.gemini.is_configured());
        assert!(config.timeout.is_none());
    }
}
