//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use moodrelay_core::config::{
    DEFAULT_DEEPSEEK_MODEL, DEFAULT_DEEPSEEK_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL,
};
use moodrelay_core::{ProviderConfig, RelayConfig};
use std::time::Duration;

pub mod analyze;
pub mod serve;

/// MoodRelay - text analysis relay
#[derive(Parser)]
#[command(name = "moodrelay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub providers: ProviderArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP relay
    Serve(serve::ServeArgs),

    /// Analyze text once and print the aggregated result
    Analyze(analyze::AnalyzeArgs),
}

/// Vendor credentials and endpoints.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_API_URL", global = true, default_value = DEFAULT_GEMINI_URL)]
    pub gemini_endpoint: String,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", global = true, default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// DeepSeek API key
    #[arg(long, env = "DEEPSEAK_API_KEY", global = true, hide_env_values = true)]
    pub deepseak_api_key: Option<String>,

    /// DeepSeek API base URL
    #[arg(long, env = "DEEPSEAK_API_URL", global = true, default_value = DEFAULT_DEEPSEEK_URL)]
    pub deepseak_endpoint: String,

    /// DeepSeek model name
    #[arg(long, env = "DEEPSEAK_MODEL", global = true, default_value = DEFAULT_DEEPSEEK_MODEL)]
    pub deepseak_model: String,

    /// Timeout for each vendor call, in seconds (no timeout when unset)
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", global = true)]
    pub provider_timeout_secs: Option<u64>,
}

impl ProviderArgs {
    pub fn to_config(&self) -> RelayConfig {
        RelayConfig {
            gemini: ProviderConfig::new(
                self.gemini_api_key.clone(),
                &self.gemini_endpoint,
                &self.gemini_model,
            ),
            deepseak: ProviderConfig::new(
                self.deepseak_api_key.clone(),
                &self.deepseak_endpoint,
                &self.deepseak_model,
            ),
            timeout: self.provider_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.providers.to_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::try_parse_from([
            "moodrelay",
            "analyze",
            "hello",
            "--gemini-api-key",
            "abc",
            "--deepseak-endpoint",
            "http://localhost:9000/",
            "--provider-timeout-secs",
            "5",
        ])
        .unwrap();

        let config = cli.providers.to_config();
        assert_eq!(config.gemini.api_key.as_deref(), Some("abc"));
        assert_eq!(config.deepseak.endpoint, "http://localhost:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
