//! Wikipedia lookup error types and retry logic.

/// Wikipedia lookup error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum WikiErrorKind {
    /// No article exists for the requested title
    #[display("No Wikipedia article found for '{}'", _0)]
    NotFound(String),
    /// The title is ambiguous; candidates carry the disambiguation options
    #[display("'{}' is ambiguous; {} candidate articles", title, candidates.len())]
    Disambiguation {
        /// The ambiguous title as requested
        title: String,
        /// Candidate article titles, capped at 15
        candidates: Vec<String>,
    },
    /// Search query was empty or whitespace
    #[display("Search query must not be empty")]
    EmptyQuery,
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Network-level failure (connect, timeout, DNS)
    #[display("Network error: {}", _0)]
    Network(String),
    /// Response body did not match the expected MediaWiki shape
    #[display("Unexpected MediaWiki response: {}", _0)]
    Response(String),
}

impl WikiErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            WikiErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            WikiErrorKind::Network(_) => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            WikiErrorKind::Http { status_code, .. } => match *status_code {
                429 => (2000, 3, 30),
                503 => (1000, 3, 20),
                500 | 502 | 504 => (500, 3, 8),
                408 => (1000, 3, 15),
                _ => (500, 3, 10),
            },
            WikiErrorKind::Network(_) => (500, 3, 10),
            _ => (500, 3, 10),
        }
    }
}

/// Wikipedia lookup error with source location tracking.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{WikiError, WikiErrorKind};
///
/// let err = WikiError::new(WikiErrorKind::NotFound("Xyzzyplugh".to_string()));
/// assert!(format!("{}", err).contains("No Wikipedia article"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Wiki Error: {} at line {} in {}", kind, line, file)]
pub struct WikiError {
    /// The kind of error that occurred
    pub kind: WikiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WikiError {
    /// Create a new WikiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WikiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// This trait allows error types to specify whether they should trigger a retry
/// and what retry strategy parameters to use.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{RetryableError, WikiError, WikiErrorKind};
///
/// let err = WikiError::new(WikiErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// let (backoff, retries, _max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 1000);
/// assert_eq!(retries, 3);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network timeouts should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    /// Default implementation returns standard parameters.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (500, 3, 10)
    }
}

impl RetryableError for WikiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
