use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `powwow`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the CLI shell continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum PowwowError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Form fields ─────────────────────────────────────────────────────
    #[error("form: {0}")]
    Form(#[from] FormError),

    // ── Form state storage ──────────────────────────────────────────────
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    // ── Share links / clipboard ─────────────────────────────────────────
    #[error("share: {0}")]
    Share(#[from] ShareError),

    // ── Structured generation ───────────────────────────────────────────
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Form errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FormError {
    #[error("field '{0}' is not a form field")]
    UnknownField(String),
}

// ─── Storage errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read {key}: {message}")]
    Read { key: String, message: String },

    #[error("write {key}: {message}")]
    Write { key: String, message: String },

    #[error("serialize form state: {0}")]
    Serialize(String),
}

/// Why a stored slot could not be turned back into a form state.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Unreadable(#[from] StorageError),

    #[error("malformed form state: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ─── Share errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("invalid base url: {0}")]
    BaseUrl(String),

    #[error("link has no share fragment")]
    MissingFragment,

    #[error("share token is not valid base64: {0}")]
    Encoding(String),

    #[error("share token does not hold a form state: {0}")]
    Payload(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

// ─── Generation errors ──────────────────────────────────────────────────────

/// Failure modes of one structured-generation call.
///
/// The HTTP envelope collapses all of them to `{"error": "Server error"}`;
/// [`GenerationError::kind`] is reported next to it so callers can tell them
/// apart while `error` and `detail` keep their shape.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    Request(String),

    #[error("prompt rendering failed: {0}")]
    Prompt(String),

    #[error("{0}")]
    Provider(String),

    #[error("model output is not valid JSON: {0}")]
    Parse(String),

    #[error("model output violates schema: {0}")]
    Schema(String),
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::Prompt(_) => "prompt",
            Self::Provider(_) => "provider",
            Self::Parse(_) => "parse",
            Self::Schema(_) => "schema",
        }
    }
}

// ─── Convenience alias ──────────────────────────────────────────────────────

pub type Result<T, E = PowwowError> = std::result::Result<T, E>;
