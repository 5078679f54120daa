//! Top-level error wrapper types.

use crate::{
    ConfigError, HttpError, JsonError, ModelError, PipelineError, RepositoryError, ServerError,
    StorageError, WikiError,
};

/// This is the foundation error enum for the workspace. Each crate
/// contributes its domain error as a variant.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{WikicomicError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: WikicomicError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WikicomicErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Wikipedia lookup error
    #[from(WikiError)]
    Wiki(WikiError),
    /// LLM or image provider error
    #[from(ModelError)]
    Model(ModelError),
    /// Panel storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Comic repository error
    #[from(RepositoryError)]
    Repository(RepositoryError),
    /// Generation pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Wikicomic error with kind discrimination.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{WikicomicResult, ConfigError};
///
/// fn might_fail() -> WikicomicResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Wikicomic Error: {}", _0)]
pub struct WikicomicError(Box<WikicomicErrorKind>);

impl WikicomicError {
    /// Create a new error from a kind.
    pub fn new(kind: WikicomicErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WikicomicErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to WikicomicErrorKind
impl<T> From<T> for WikicomicError
where
    T: Into<WikicomicErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Wikicomic operations.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{WikicomicResult, HttpError};
///
/// fn fetch_data() -> WikicomicResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type WikicomicResult<T> = std::result::Result<T, WikicomicError>;
