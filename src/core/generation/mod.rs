mod prompt;
mod request;
mod schema;

pub use prompt::{PromptEngine, build_prompt};
pub use request::GenerationRequest;
pub use schema::{
    Aida, FourPs, MAX_HOOKS, MIN_HOOKS, MarketingOutput, SCHEMA_NAME, output_schema,
};
#[cfg(test)]
pub(crate) use schema::sample_output;

use crate::core::providers::{JsonSchemaSpec, StructuredOutput, StructuredProvider};
use crate::error::GenerationError;
use serde_json::Value;
use std::sync::Arc;

/// Fixed model identifier used for every request.
pub const GENERATION_MODEL: &str = "gpt-4o-mini";

impl StructuredOutput {
    /// Decode into a schema-conformant [`MarketingOutput`] or fail as a whole.
    pub fn into_marketing_output(self) -> Result<MarketingOutput, GenerationError> {
        let value = match self {
            Self::Parsed(value) => value,
            Self::Text(text) => serde_json::from_str::<Value>(&text)
                .map_err(|e| GenerationError::Parse(e.to_string()))?,
        };
        let output: MarketingOutput =
            serde_json::from_value(value).map_err(|e| GenerationError::Schema(e.to_string()))?;
        output.validate().map_err(GenerationError::Schema)?;
        Ok(output)
    }
}

/// Prompt + schema + one provider call. Holds no per-request state.
#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn StructuredProvider>,
    model: String,
    schema: Arc<Value>,
}

impl Generator {
    pub fn new(provider: Arc<dyn StructuredProvider>) -> Self {
        Self {
            provider,
            model: GENERATION_MODEL.to_string(),
            schema: Arc::new(output_schema()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<MarketingOutput, GenerationError> {
        let prompt = build_prompt(request)?;
        let schema = JsonSchemaSpec {
            name: SCHEMA_NAME,
            schema: &self.schema,
        };

        tracing::debug!(
            provider = self.provider.name(),
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "requesting structured generation"
        );

        let output = self
            .provider
            .complete_structured(&prompt, schema, &self.model)
            .await
            .map_err(|e| GenerationError::Provider(format!("{e:#}")))?;
        output.into_marketing_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct StubProvider {
        reply: Result<StructuredOutput, String>,
        seen: Mutex<Vec<(String, String, String)>>,
    }

    impl StubProvider {
        fn new(reply: Result<StructuredOutput, String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl StructuredProvider for StubProvider {
        async fn complete_structured(
            &self,
            prompt: &str,
            schema: JsonSchemaSpec<'_>,
            model: &str,
        ) -> anyhow::Result<StructuredOutput> {
            self.seen.lock().unwrap().push((
                prompt.to_string(),
                schema.name.to_string(),
                model.to_string(),
            ));
            self.reply.clone().map_err(|e| anyhow::anyhow!(e))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn parsed_output_is_returned() {
        let stub = StubProvider::new(Ok(StructuredOutput::Parsed(sample_output())));
        let generator = Generator::new(stub.clone());
        let request = GenerationRequest {
            business: Some("Bakery".into()),
            ..GenerationRequest::default()
        };

        let output = generator.generate(&request).await.unwrap();
        assert_eq!(output.hooks.len(), 3);

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0.contains("- Business: Bakery"));
        assert_eq!(seen[0].1, "MarketingOutput");
        assert_eq!(seen[0].2, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn text_output_is_parsed() {
        let text = sample_output().to_string();
        let generator = Generator::new(StubProvider::new(Ok(StructuredOutput::Text(text))));
        let output = generator
            .generate(&GenerationRequest::default())
            .await
            .unwrap();
        assert_eq!(output.cta, "DM START");
    }

    #[tokio::test]
    async fn provider_failure_keeps_raw_message() {
        let generator = Generator::new(StubProvider::new(Err("connection reset".into())));
        let err = generator
            .generate(&GenerationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "provider");
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn non_json_text_is_a_parse_error() {
        let generator = Generator::new(StubProvider::new(Ok(StructuredOutput::Text(
            "Sure! Here is your copy:".into(),
        ))));
        let err = generator
            .generate(&GenerationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[tokio::test]
    async fn partial_object_is_a_schema_error() {
        let generator = Generator::new(StubProvider::new(Ok(StructuredOutput::Parsed(
            json!({"tagline": "only this"}),
        ))));
        let err = generator
            .generate(&GenerationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "schema");
    }

    #[test]
    fn too_few_hooks_is_a_schema_error() {
        let mut value = sample_output();
        value["hooks"] = json!([]);
        let err = StructuredOutput::Parsed(value)
            .into_marketing_output()
            .unwrap_err();
        assert!(matches!(err, GenerationError::Schema(_)));
    }
}
