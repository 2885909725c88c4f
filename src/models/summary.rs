use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummarizeRequest {
    pub transcript: String,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// What a client reads back from `/summarize`. Older deployments answered
/// with `response` instead of `summary`, and failures carry `error`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SummarizePayload {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SummarizePayload {
    /// The generated text, skipping empty fields.
    pub fn text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.response.as_deref().filter(|s| !s.is_empty()))
    }
}
