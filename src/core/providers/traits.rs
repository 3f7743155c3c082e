use async_trait::async_trait;
use serde_json::Value;

/// What a provider hands back for a schema-constrained request.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredOutput {
    /// The provider already decoded the JSON.
    Parsed(Value),
    /// Raw text expected to hold a JSON document.
    Text(String),
}

/// Named JSON schema the provider must honour strictly.
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaSpec<'a> {
    pub name: &'a str,
    pub schema: &'a Value,
}

#[async_trait]
pub trait StructuredProvider: Send + Sync {
    /// Submit `prompt` and request output conforming to `schema`.
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: JsonSchemaSpec<'_>,
        model: &str,
    ) -> anyhow::Result<StructuredOutput>;

    fn name(&self) -> &str;
}
