//! Types returned by the article lookup traits.

use serde::{Deserialize, Serialize};
use wikicomic_core::Article;

/// Outcome of resolving a title to an article.
///
/// Not-found and transient network failures are reported as errors by
/// [`crate::ArticleSource::fetch`]; disambiguation is a successful lookup
/// that the caller must re-prompt on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleLookup {
    /// The title resolved to exactly one article
    Found(Article),
    /// The title is ambiguous
    Disambiguation {
        /// The title as requested
        title: String,
        /// Candidate article titles, capped at 15
        candidates: Vec<String>,
    },
}

/// Results of a free-text article search.
///
/// # Examples
///
/// ```
/// use wikicomic_interface::SearchResults;
///
/// let results = SearchResults {
///     results: vec!["Albert Einstein".to_string()],
///     suggestion: None,
/// };
///
/// assert_eq!(results.results.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching article titles, best first
    pub results: Vec<String>,
    /// Spelling suggestion offered by the search backend, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
