//! Response bodies produced by the API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::IntoEnumIterator;
use wikicomic_core::{
    AgeGroup, Comic, ComicStatus, ComicStyle, EducationLevel, SCENE_COUNT_DEFAULT,
    SCENE_COUNT_MAX, SCENE_COUNT_MIN, TargetLength,
};

/// URL prefix panel images are served under.
pub const MEDIA_URL: &str = "/media";

/// Percent-encode a relative media path, segment by segment.
fn media_url(image_path: &str) -> String {
    let encoded = image_path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}", MEDIA_URL, encoded)
}

/// Body of a `202 Accepted` generation response.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateAccepted {
    /// Key for polling `GET /api/status/{request_id}`.
    pub request_id: String,
    /// Human-readable acknowledgement.
    pub message: String,
}

impl GenerateAccepted {
    /// Acknowledge a started generation run.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            message: "Comic generation started".to_string(),
        }
    }
}

/// One scene of a comic, with its public image URL.
#[derive(Debug, Clone, Serialize)]
pub struct SceneBody {
    /// 1-based scene number; failed renders leave gaps.
    pub scene_number: u32,
    /// The prompt block the panel was rendered from.
    pub prompt: String,
    /// Image URL under the media mount.
    pub image_url: String,
}

/// Full comic record returned by `GET /api/comic/{comic_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ComicBody {
    /// Comic identifier.
    pub id: i64,
    /// Article title the comic was generated from.
    pub title: String,
    /// Source article URL.
    pub source_url: String,
    /// Generated storyline text, once written.
    pub storyline: Option<String>,
    /// Lifecycle status.
    pub status: ComicStatus,
    /// Error message when the pipeline failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Rendered scenes in generation order.
    pub scenes: Vec<SceneBody>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl ComicBody {
    /// Build the API shape from a stored comic, deriving media URLs.
    pub fn from_comic(comic: &Comic) -> Self {
        let scenes = comic
            .scenes
            .iter()
            .map(|scene| SceneBody {
                scene_number: scene.number,
                prompt: scene.prompt.clone(),
                image_url: media_url(&scene.image_path),
            })
            .collect();

        Self {
            id: comic.id,
            title: comic.title.clone(),
            source_url: comic.source_url.clone(),
            storyline: comic.storyline.clone(),
            status: comic.status,
            error: comic.error.clone(),
            scenes,
            created_at: comic.created_at,
            updated_at: comic.updated_at,
        }
    }
}

/// One entry of the `GET /api/comics` listing.
#[derive(Debug, Clone, Serialize)]
pub struct ComicSummary {
    /// Comic identifier.
    pub id: i64,
    /// Article title the comic was generated from.
    pub title: String,
    /// Lifecycle status.
    pub status: ComicStatus,
    /// Number of stored scenes.
    pub scene_count: usize,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl ComicSummary {
    /// Build the listing shape from a stored comic.
    pub fn from_comic(comic: &Comic) -> Self {
        Self {
            id: comic.id,
            title: comic.title.clone(),
            status: comic.status,
            scene_count: comic.scenes.len(),
            created_at: comic.created_at,
            updated_at: comic.updated_at,
        }
    }
}

/// Scene count bounds exposed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SceneCountRange {
    /// Smallest accepted scene count.
    pub min: u32,
    /// Largest accepted scene count.
    pub max: u32,
    /// Scene count used when the caller does not specify one.
    pub default: u32,
}

/// Body of `GET /api/options`: every valid option value.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsBody {
    /// Valid comic styles.
    pub comic_styles: Vec<&'static str>,
    /// Valid storyline lengths.
    pub target_lengths: Vec<&'static str>,
    /// Valid audience age groups.
    pub age_groups: Vec<&'static str>,
    /// Valid education levels.
    pub education_levels: Vec<&'static str>,
    /// Scene count bounds.
    pub num_scenes_range: SceneCountRange,
}

impl OptionsBody {
    /// Enumerate the current option values and bounds.
    pub fn new() -> Self {
        Self {
            comic_styles: ComicStyle::iter().map(|style| style.as_str()).collect(),
            target_lengths: TargetLength::iter().map(|length| length.as_str()).collect(),
            age_groups: AgeGroup::iter().map(|group| group.as_str()).collect(),
            education_levels: EducationLevel::iter().map(|level| level.as_str()).collect(),
            num_scenes_range: SceneCountRange {
                min: SCENE_COUNT_MIN,
                max: SCENE_COUNT_MAX,
                default: SCENE_COUNT_DEFAULT,
            },
        }
    }
}

impl Default for OptionsBody {
    fn default() -> Self {
        Self::new()
    }
}
