//! Comic repository error types.

/// Kinds of repository errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RepositoryErrorKind {
    /// No comic exists with the given identifier
    #[display("Comic {} not found", _0)]
    ComicNotFound(i64),
    /// A scene with this number already exists for the comic
    #[display("Scene {} already exists for comic {}", scene_number, comic_id)]
    DuplicateScene {
        /// The owning comic identifier
        comic_id: i64,
        /// The conflicting scene number
        scene_number: u32,
    },
}

/// Repository error with location tracking.
///
/// # Examples
///
/// ```
/// use wikicomic_error::{RepositoryError, RepositoryErrorKind};
///
/// let err = RepositoryError::new(RepositoryErrorKind::ComicNotFound(42));
/// assert!(format!("{}", err).contains("Comic 42 not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Repository Error: {} at line {} in {}", kind, line, file)]
pub struct RepositoryError {
    /// The kind of error that occurred
    pub kind: RepositoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RepositoryError {
    /// Create a new repository error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RepositoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
