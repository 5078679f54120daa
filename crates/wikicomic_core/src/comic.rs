//! Comic and scene records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a comic record.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ComicStatus {
    /// Generation is underway
    #[default]
    #[display("pending")]
    Pending,
    /// All pipeline steps finished
    #[display("completed")]
    Completed,
    /// The pipeline aborted with an error
    #[display("failed")]
    Failed,
}

impl ComicStatus {
    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComicStatus::Pending => "pending",
            ComicStatus::Completed => "completed",
            ComicStatus::Failed => "failed",
        }
    }
}

/// One rendered panel of a comic.
///
/// Scene numbers are 1-based and follow generation order. A failed render
/// leaves a gap rather than renumbering later scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Identifier of the owning comic
    pub comic_id: i64,
    /// 1-based scene number, unique within the comic
    pub number: u32,
    /// The scene prompt block the panel was rendered from
    pub prompt: String,
    /// Panel image path, relative to the media root
    pub image_path: String,
    /// When the scene record was created
    pub created_at: DateTime<Utc>,
}

/// A comic record and its scenes.
///
/// # Examples
///
/// ```
/// use wikicomic_core::{Comic, ComicStatus};
/// use chrono::Utc;
///
/// let comic = Comic {
///     id: 1,
///     title: "Albert Einstein".to_string(),
///     source_url: "https://en.wikipedia.org/wiki/Albert_Einstein".to_string(),
///     storyline: None,
///     status: ComicStatus::Pending,
///     error: None,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
///     scenes: Vec::new(),
/// };
///
/// assert_eq!(comic.status, ComicStatus::Pending);
/// assert!(comic.scenes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    /// Monotonically increasing identifier, never reused
    pub id: i64,
    /// Article title the comic was generated from
    pub title: String,
    /// Source article URL
    pub source_url: String,
    /// Generated storyline text, once written
    pub storyline: Option<String>,
    /// Lifecycle status
    pub status: ComicStatus,
    /// Error message when the pipeline failed
    pub error: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated
    pub updated_at: DateTime<Utc>,
    /// Rendered scenes in generation order
    pub scenes: Vec<Scene>,
}
