//! Prompt construction and reply parsing shared by all providers.

use serde_json::Value;

use crate::model::{AnalysisFields, AnalysisOutcome};

/// Build the analysis instruction for `text`, asking for a reply in `tone`.
///
/// Both values are embedded verbatim. The output is deterministic.
pub fn build_prompt(text: &str, tone: &str) -> String {
    format!(
        "Analyze the following text and respond with a JSON object containing these fields:\n\
         - \"mood\": a short description of the overall mood\n\
         - \"emotions\": an array of the emotions expressed\n\
         - \"suggestedResponse\": a reply to the text written in a {tone} tone\n\
         - \"writingStyle\": a brief description of the writing style\n\
         Respond with the JSON object only.\n\
         \n\
         Text: \"{text}\""
    )
}

/// Turn a vendor's generated text into an analysis outcome.
///
/// One parse attempt: a JSON object becomes [`AnalysisOutcome::Structured`],
/// anything else is kept verbatim as [`AnalysisOutcome::Raw`].
pub fn parse_reply(reply: &str) -> AnalysisOutcome {
    match serde_json::from_str::<Value>(reply) {
        Ok(Value::Object(fields)) => AnalysisOutcome::Structured(AnalysisFields::new(fields)),
        _ => AnalysisOutcome::Raw(reply.to_string()),
    }
}
