pub mod http_client;
pub mod openai;
mod openai_types;
pub mod scrub;
pub mod traits;

pub use http_client::{DEFAULT_PROVIDER_TIMEOUT_SECS, build_provider_client_with_timeout};
pub use openai::{DEFAULT_OPENAI_BASE_URL, OpenAiResponsesProvider};
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::{JsonSchemaSpec, StructuredOutput, StructuredProvider};
