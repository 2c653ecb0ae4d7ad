//! # MoodRelay Core
//!
//! Provider adapters and fan-out analysis for the MoodRelay service.
//!
//! Builds the analysis prompt, calls each selected vendor, parses what comes
//! back and merges the per-provider results into one response.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod providers;

pub use analyzer::Analyzer;
pub use config::{ProviderConfig, RelayConfig};
pub use error::{ConfigError, ProviderError, ProviderResult};
pub use model::{
    AggregatedResponse, AnalysisFields, AnalysisOutcome, AnalysisResult, ProviderKind,
    ProviderSelection, DEFAULT_TONE,
};
pub use providers::Provider;
