//! LLM and image provider error types.

/// Error conditions raised by the Groq and Gemini REST clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to construct the HTTP client
    #[display("Failed to create API client: {}", _0)]
    ClientCreation(String),
    /// API request failed before a response arrived
    #[display("API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response contained no usable completion text
    #[display("Empty completion from {}", _0)]
    EmptyCompletion(String),
    /// Response contained no inline image data
    #[display("No image data in response")]
    MissingImageData,
    /// Base64 decoding failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Failed to deserialize response
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::MissingApiKey("GROQ_API_KEY".to_string()));
/// assert!(format!("{}", err).contains("GROQ_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
