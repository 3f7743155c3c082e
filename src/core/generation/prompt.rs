use super::request::GenerationRequest;
use crate::error::GenerationError;
use tera::{Context, Tera};

const MARKETING_PROMPT_NAME: &str = "marketing_prompt";

const MARKETING_PROMPT: &str = "\
You are a senior marketing strategist. Produce concise, *practical* outputs.
Return ONLY JSON matching the provided schema. No extra text.

Inputs:
- Business: {{ business }}
- Audience: {{ audience }}
- Offer: {{ offer }}
- Tone: {{ tone }}
- Platform: {{ platform }}
- Core principle to emphasize (AIDA, 4Ps, etc.): {{ principle }}

Rules:
- Tailor language to the audience and platform.
- Be specific and avoid fluff.
- Keep each item punchy (<= 20 words when possible).
";

/// Tera-backed renderer for the instructional prompt.
pub struct PromptEngine {
    tera: Tera,
}

impl PromptEngine {
    pub fn new() -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        tera.add_raw_template(MARKETING_PROMPT_NAME, MARKETING_PROMPT)
            .map_err(|e| GenerationError::Prompt(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Missing inputs render as empty strings.
    pub fn render(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let or_empty = |v: &Option<String>| v.clone().unwrap_or_default();

        let mut ctx = Context::new();
        ctx.insert("business", &or_empty(&request.business));
        ctx.insert("audience", &or_empty(&request.audience));
        ctx.insert("offer", &or_empty(&request.offer));
        ctx.insert("tone", &or_empty(&request.tone));
        ctx.insert("platform", &or_empty(&request.platform));
        ctx.insert("principle", &or_empty(&request.principle));

        self.tera
            .render(MARKETING_PROMPT_NAME, &ctx)
            .map_err(|e| GenerationError::Prompt(e.to_string()))
    }
}

pub fn build_prompt(request: &GenerationRequest) -> Result<String, GenerationError> {
    PromptEngine::new()?.render(request)
}
