use serde::{Deserialize, Serialize};

/// Free-text inputs for one structured generation call. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub business: Option<String>,
    pub audience: Option<String>,
    pub offer: Option<String>,
    pub tone: Option<String>,
    pub platform: Option<String>,
    pub principle: Option<String>,
}

impl GenerationRequest {
    /// Decode an HTTP body. An empty body means "no inputs".
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}
