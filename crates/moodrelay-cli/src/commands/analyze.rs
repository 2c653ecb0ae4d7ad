//! One-shot analysis command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use moodrelay_core::{AnalysisResult, Analyzer, ProviderSelection, RelayConfig, DEFAULT_TONE};
use tracing::debug;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Ask Gemini
    #[arg(long)]
    pub gemini: bool,

    /// Ask DeepSeek
    #[arg(long)]
    pub deepseak: bool,

    /// Tone of the suggested response
    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,
}

impl AnalyzeArgs {
    /// Selected providers; all of them when no flag is given.
    fn selection(&self) -> ProviderSelection {
        if !self.gemini && !self.deepseak {
            return ProviderSelection {
                gemini: true,
                deepseak: true,
            };
        }
        ProviderSelection {
            gemini: self.gemini,
            deepseak: self.deepseak,
        }
    }
}

pub async fn execute(args: AnalyzeArgs, config: &RelayConfig) -> Result<()> {
    if args.text.is_empty() {
        anyhow::bail!("Missing text");
    }

    let analyzer = Analyzer::from_config(config).context("Failed to set up providers")?;
    let selection = args.selection();
    debug!(?selection, tone = %args.tone, "Running one-shot analysis");

    let response = analyzer
        .analyze(&args.text, &args.tone, selection)
        .await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    for kind in response.providers() {
        if let Some(AnalysisResult::Failed { error }) = response.get(kind) {
            eprintln!("{} {}: {}", "!".yellow(), kind.display_name(), error);
        }
    }

    Ok(())
}
