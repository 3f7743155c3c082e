use super::openai_types::{
    OutputContent, ResponseFormat, ResponsesRequest, ResponsesResponse, TextOptions,
};
use super::{
    DEFAULT_PROVIDER_TIMEOUT_SECS, JsonSchemaSpec, StructuredOutput, StructuredProvider,
    api_error, build_provider_client_with_timeout,
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// OpenAI Responses API with `json_schema` structured output.
pub struct OpenAiResponsesProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    base_url: String,
    client: Client,
}

impl OpenAiResponsesProvider {
    pub fn new(api_key: Option<&str>) -> Self {
        Self::with_base_url(api_key, DEFAULT_OPENAI_BASE_URL, DEFAULT_PROVIDER_TIMEOUT_SECS)
    }

    pub fn with_base_url(api_key: Option<&str>, base_url: &str, timeout_secs: u64) -> Self {
        Self {
            cached_auth_header: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(|k| format!("Bearer {k}")),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_provider_client_with_timeout(timeout_secs),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/responses", self.base_url)
    }

    fn build_request<'a>(
        prompt: &'a str,
        schema: JsonSchemaSpec<'a>,
        model: &'a str,
    ) -> ResponsesRequest<'a> {
        ResponsesRequest {
            model,
            input: prompt,
            text: TextOptions {
                format: ResponseFormat {
                    r#type: "json_schema",
                    name: schema.name,
                    schema: schema.schema,
                    strict: true,
                },
            },
        }
    }

    /// Pre-parsed output wins, then the aggregate text, then the message parts.
    fn extract_output(response: ResponsesResponse) -> anyhow::Result<StructuredOutput> {
        if let Some(error) = response.error {
            anyhow::bail!("OpenAI returned an error: {}", error.message);
        }
        if let Some(parsed) = response.output_parsed.filter(|v| !v.is_null()) {
            return Ok(StructuredOutput::Parsed(parsed));
        }
        if let Some(text) = response.output_text.filter(|t| !t.is_empty()) {
            return Ok(StructuredOutput::Text(text));
        }

        let mut text = String::new();
        for item in response.output.iter().filter(|i| i.r#type == "message") {
            for part in &item.content {
                match part {
                    OutputContent::OutputText { text: chunk } => text.push_str(chunk),
                    OutputContent::Refusal { refusal } => {
                        anyhow::bail!("OpenAI refused the request: {refusal}");
                    }
                    OutputContent::Other => {}
                }
            }
        }

        if text.is_empty() {
            anyhow::bail!("No output text in OpenAI response");
        }
        Ok(StructuredOutput::Text(text))
    }
}

#[async_trait]
impl StructuredProvider for OpenAiResponsesProvider {
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: JsonSchemaSpec<'_>,
        model: &str,
    ) -> anyhow::Result<StructuredOutput> {
        let auth_header = self.cached_auth_header.as_ref().ok_or_else(|| {
            anyhow::anyhow!("OpenAI API key not set. Set OPENAI_API_KEY or edit config.toml.")
        })?;

        let request = Self::build_request(prompt, schema, model);
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", auth_header)
            .json(&request)
            .send()
            .await
            .context("OpenAI request failed")?;

        if !response.status().is_success() {
            return Err(api_error("OpenAI", response).await);
        }

        let body: ResponsesResponse = response
            .json()
            .await
            .context("OpenAI response JSON decode failed")?;
        Self::extract_output(body)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
