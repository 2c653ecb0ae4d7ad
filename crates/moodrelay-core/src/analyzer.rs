//! Fan-out of one analysis request across the selected providers.

use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::error::{ConfigError, ProviderResult};
use crate::model::{
    AggregatedResponse, AnalysisOutcome, AnalysisResult, ProviderKind, ProviderSelection,
};
use crate::providers::{build_providers, Provider};

/// Runs the selected providers and merges their results.
#[derive(Clone)]
pub struct Analyzer {
    providers: Vec<Arc<dyn Provider>>,
}

impl Analyzer {
    /// Create an analyzer over an explicit provider list. List order is call order.
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Create an analyzer with every vendor adapter built from `config`.
    pub fn from_config(config: &RelayConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(build_providers(config)?))
    }

    pub fn providers(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.iter()
    }

    /// Analyze `text` with every selected provider.
    ///
    /// Each provider runs as its own task. A failing or panicking provider
    /// only fills its own slot with an error; results keep call order.
    pub async fn analyze(
        &self,
        text: &str,
        tone: &str,
        selection: ProviderSelection,
    ) -> AggregatedResponse {
        let tasks: Vec<_> = self
            .providers
            .iter()
            .filter(|provider| selection.is_selected(provider.kind()))
            .map(|provider| {
                let provider = Arc::clone(provider);
                let text = text.to_string();
                let tone = tone.to_string();
                let kind = provider.kind();
                let handle = tokio::spawn(async move { provider.analyze(&text, &tone).await });
                (kind, handle)
            })
            .collect();

        let mut response = AggregatedResponse::new();
        for (kind, handle) in tasks {
            response.insert(kind, collect(kind, handle.await));
        }

        info!(providers = response.len(), "Analysis complete");
        response
    }
}

fn collect(
    kind: ProviderKind,
    joined: Result<ProviderResult<AnalysisOutcome>, JoinError>,
) -> AnalysisResult {
    match joined {
        Ok(Ok(outcome)) => outcome.into(),
        Ok(Err(e)) => {
            warn!(provider = %kind, error = %e, "Provider call failed");
            AnalysisResult::failed(e.to_string())
        }
        Err(e) => {
            warn!(provider = %kind, error = %e, "Provider task aborted");
            AnalysisResult::failed(format!("{} analysis task failed: {}", kind.vendor_name(), e))
        }
    }
}
