//! Generation status records published during a pipeline run.

use serde::{Deserialize, Serialize};

/// Progress value after the comic record is created.
pub const PROGRESS_CREATED: u8 = 10;
/// Progress value after the storyline is written.
pub const PROGRESS_STORYLINE: u8 = 30;
/// Progress value after scene prompts are parsed.
pub const PROGRESS_PROMPTS: u8 = 40;
/// Progress value on completion.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Phase of a generation run, as exposed to status pollers.
#[derive(
    Debug,
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationPhase {
    /// The request was accepted and validation passed
    #[display("STARTED")]
    Started,
    /// The pipeline is between article resolution and the final scene
    #[display("IN_PROGRESS")]
    InProgress,
    /// The comic is ready
    #[display("COMPLETED")]
    Completed,
    /// The run terminated with an error
    #[display("ERROR")]
    Error,
}

/// One status snapshot for a generation request.
///
/// Progress is monotonically non-decreasing across the snapshots published
/// for a single request, except that a terminal error resets it to 0.
///
/// # Examples
///
/// ```
/// use wikicomic_core::{GenerationPhase, StatusRecord};
///
/// let record = StatusRecord::new(GenerationPhase::Started, "Starting comic generation", 0);
/// assert_eq!(record.progress, 0);
/// assert!(record.comic_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Current phase of the run
    pub status: GenerationPhase,
    /// Human-readable description of the current step
    pub message: String,
    /// Progress percentage, 0 to 100
    pub progress: u8,
    /// Comic identifier, present once the record exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comic_id: Option<i64>,
}

impl StatusRecord {
    /// Create a record with no comic identifier.
    pub fn new(status: GenerationPhase, message: impl Into<String>, progress: u8) -> Self {
        Self {
            status,
            message: message.into(),
            progress,
            comic_id: None,
        }
    }

    /// Attach a comic identifier to the record.
    pub fn with_comic(mut self, comic_id: i64) -> Self {
        self.comic_id = Some(comic_id);
        self
    }
}

/// Progress value after `rendered` of `total` panels have been attempted.
///
/// Interpolates linearly from just past [`PROGRESS_PROMPTS`] to
/// [`PROGRESS_COMPLETE`] across the scene loop.
///
/// # Examples
///
/// ```
/// use wikicomic_core::scene_progress;
///
/// assert_eq!(scene_progress(1, 3), 60);
/// assert_eq!(scene_progress(3, 3), 100);
/// ```
pub fn scene_progress(rendered: u32, total: u32) -> u8 {
    if total == 0 {
        return PROGRESS_COMPLETE;
    }
    let span = u32::from(PROGRESS_COMPLETE - PROGRESS_PROMPTS);
    let step = PROGRESS_PROMPTS as u32 + (rendered.min(total) * span) / total;
    step as u8
}
