use serde::{Deserialize, Serialize};

/// One candidate option as submitted by the authoring UI. `correct` defaults
/// to false when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionPayload {
    pub content: String,
    #[serde(default)]
    pub correct: bool,
}

/// `qtype` arrives as a raw string and is parsed (or rejected) by the
/// validator, so unknown types surface as a named violation rather than a
/// deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionPayload {
    pub context: String,
    pub qtype: String,
    #[serde(default)]
    pub options: Vec<OptionPayload>,
}

/// Partial update. When `options` is present the full persisted option set is
/// replaced with it; when absent the existing options stay untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuestionPayload {
    pub context: Option<String>,
    pub qtype: Option<String>,
    pub options: Option<Vec<OptionPayload>>,
}
