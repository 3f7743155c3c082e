use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(super) struct ResponsesRequest<'a> {
    pub(super) model: &'a str,
    pub(super) input: &'a str,
    pub(super) text: TextOptions<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct TextOptions<'a> {
    pub(super) format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct ResponseFormat<'a> {
    pub(super) r#type: &'static str,
    pub(super) name: &'a str,
    pub(super) schema: &'a Value,
    pub(super) strict: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsesResponse {
    /// Present when a proxy or SDK layer already decoded the structured output.
    #[serde(default)]
    pub(super) output_parsed: Option<Value>,
    /// SDK-style convenience aggregate of all `output_text` parts.
    #[serde(default)]
    pub(super) output_text: Option<String>,
    #[serde(default)]
    pub(super) output: Vec<OutputItem>,
    #[serde(default)]
    pub(super) error: Option<ResponseError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OutputItem {
    #[serde(default)]
    pub(super) r#type: String,
    #[serde(default)]
    pub(super) content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum OutputContent {
    OutputText {
        text: String,
    },
    Refusal {
        refusal: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponseError {
    #[serde(default)]
    pub(super) message: String,
}
