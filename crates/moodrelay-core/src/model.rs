//! Request and response data model.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Default tone injected into prompts when the caller does not supply one.
pub const DEFAULT_TONE: &str = "empathetic";

/// The text-analysis vendors the relay can forward to.
///
/// Order of the variants is the order providers are called in and the order
/// their results appear in the aggregated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderKind {
    Gemini,
    Deepseak,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Gemini, ProviderKind::Deepseak];

    /// Key used for this provider in the aggregated response.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Deepseak => "Deepseak",
        }
    }

    /// Vendor name used in error messages.
    pub fn vendor_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Deepseak => "DeepSeek",
        }
    }

    /// Request flag that selects this provider.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Deepseak => "deepseak",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Provider flags from the `providers` field of an analysis request.
///
/// The `deepseak` spelling is part of the wire format and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSelection {
    #[serde(default)]
    pub gemini: bool,
    #[serde(default)]
    pub deepseak: bool,
}

impl ProviderSelection {
    pub fn is_selected(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Gemini => self.gemini,
            ProviderKind::Deepseak => self.deepseak,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.gemini && !self.deepseak
    }
}

/// A vendor reply that parsed as a JSON object.
///
/// The object is kept exactly as the vendor produced it. Accessors read the
/// fields the prompt asks for, but nothing enforces that they are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisFields(Map<String, Value>);

impl AnalysisFields {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn mood(&self) -> Option<&str> {
        self.0.get("mood").and_then(Value::as_str)
    }

    pub fn emotions(&self) -> Vec<&str> {
        self.0
            .get("emotions")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn suggested_response(&self) -> Option<&str> {
        self.0.get("suggestedResponse").and_then(Value::as_str)
    }

    pub fn writing_style(&self) -> Option<&str> {
        self.0.get("writingStyle").and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Outcome of a successful provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Structured(AnalysisFields),
    Raw(String),
}

/// Per-provider entry of the aggregated response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Structured(AnalysisFields),
    Raw {
        #[serde(rename = "rawResponse")]
        raw_response: String,
    },
    Failed {
        error: String,
    },
}

impl AnalysisResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            error: message.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl From<AnalysisOutcome> for AnalysisResult {
    fn from(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Structured(fields) => Self::Structured(fields),
            AnalysisOutcome::Raw(raw_response) => Self::Raw { raw_response },
        }
    }
}

/// Results of one analysis request, keyed by provider display name.
///
/// Serializes as a JSON object whose keys follow call-issue order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedResponse {
    entries: Vec<(ProviderKind, AnalysisResult)>,
}

impl AggregatedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a provider result, replacing any earlier one for the same provider.
    pub fn insert(&mut self, provider: ProviderKind, result: AnalysisResult) {
        match self.entries.iter_mut().find(|(kind, _)| *kind == provider) {
            Some(entry) => entry.1 = result,
            None => self.entries.push((provider, result)),
        }
    }

    pub fn get(&self, provider: ProviderKind) -> Option<&AnalysisResult> {
        self.entries
            .iter()
            .find(|(kind, _)| *kind == provider)
            .map(|(_, result)| result)
    }

    pub fn providers(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AggregatedResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, result) in &self.entries {
            map.serialize_entry(kind.display_name(), result)?;
        }
        map.end()
    }
}
