use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Name under which the schema is registered with the provider.
pub const SCHEMA_NAME: &str = "MarketingOutput";

pub const MIN_HOOKS: usize = 3;
pub const MAX_HOOKS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aida {
    pub attention: String,
    pub interest: String,
    pub desire: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FourPs {
    pub product: String,
    pub price: String,
    pub place: String,
    pub promotion: String,
}

/// Model-generated marketing copy. Mirrors [`output_schema`] field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketingOutput {
    pub tagline: String,
    pub value_proposition: String,
    pub aida: Aida,
    pub four_ps: FourPs,
    pub hooks: Vec<String>,
    pub cta: String,
}

impl MarketingOutput {
    /// Constraints serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.hooks.len();
        if !(MIN_HOOKS..=MAX_HOOKS).contains(&n) {
            return Err(format!(
                "hooks must hold {MIN_HOOKS} to {MAX_HOOKS} items, got {n}"
            ));
        }
        Ok(())
    }
}

/// Strict JSON schema sent with every request.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "tagline": { "type": "string" },
            "value_proposition": { "type": "string" },
            "aida": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "attention": { "type": "string" },
                    "interest": { "type": "string" },
                    "desire": { "type": "string" },
                    "action": { "type": "string" }
                },
                "required": ["attention", "interest", "desire", "action"]
            },
            "four_ps": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "product": { "type": "string" },
                    "price": { "type": "string" },
                    "place": { "type": "string" },
                    "promotion": { "type": "string" }
                },
                "required": ["product", "price", "place", "promotion"]
            },
            "hooks": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": MIN_HOOKS,
                "maxItems": MAX_HOOKS
            },
            "cta": { "type": "string" }
        },
        "required": ["tagline", "value_proposition", "aida", "four_ps", "hooks", "cta"]
    })
}

#[cfg(test)]
pub(crate) fn sample_output() -> Value {
    json!({
        "tagline": "Clear offers, steady bookings.",
        "value_proposition": "A 20-minute daily habit that turns posts into paid calls.",
        "aida": {
            "attention": "Tired of guessing what to post?",
            "interest": "Most coaches lose leads to fuzzy messaging.",
            "desire": "Picture 2-5 bookings a week from content you already make.",
            "action": "DM START today."
        },
        "four_ps": {
            "product": "Starter Sprint coaching",
            "price": "$97 intro",
            "place": "Live on Zoom",
            "promotion": "Client screenshots up front"
        },
        "hooks": ["Stop posting into the void", "Your offer, in one line", "Receipts first"],
        "cta": "DM START"
    })
}
