//! Wikipedia article content.

use serde::{Deserialize, Serialize};

/// Structured content of a resolved Wikipedia article.
///
/// # Examples
///
/// ```
/// use wikicomic_core::Article;
///
/// let article = Article {
///     title: "Albert Einstein".to_string(),
///     url: "https://en.wikipedia.org/wiki/Albert_Einstein".to_string(),
///     content: "Albert Einstein was a theoretical physicist...".to_string(),
///     summary: "German-born theoretical physicist".to_string(),
/// };
///
/// assert_eq!(article.title, "Albert Einstein");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Canonical article title
    pub title: String,
    /// Canonical page URL
    pub url: String,
    /// Plain-text body of the article
    pub content: String,
    /// Lead-section summary
    pub summary: String,
}
