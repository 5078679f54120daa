//! Request bodies accepted by the API.

use serde::Deserialize;
use tracing::warn;
use wikicomic_core::ComicOptions;

/// Body of `POST /api/generate`.
///
/// Every option is optional; unknown values fall back to the defaults
/// rather than rejecting the request. The scene count is clamped to the
/// supported range by the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    /// Wikipedia article title to generate from.
    pub title: Option<String>,
    /// Visual style, e.g. "manga" or "comic book".
    pub comic_style: Option<String>,
    /// Storyline length, one of "short", "medium", "long".
    pub target_length: Option<String>,
    /// Number of scenes to generate.
    pub num_scenes: Option<u32>,
    /// Audience age group, e.g. "kids" or "general".
    pub age_group: Option<String>,
    /// Depth of explanation, one of "basic", "standard", "advanced".
    pub education_level: Option<String>,
}

impl GenerateRequest {
    /// Resolve the option fields into [`ComicOptions`].
    ///
    /// Absent and unrecognized values take the defaults; unrecognized
    /// values are logged.
    pub fn options(&self) -> ComicOptions {
        let mut builder = ComicOptions::builder();
        builder
            .style(parse_option("comic_style", self.comic_style.as_deref()))
            .length(parse_option("target_length", self.target_length.as_deref()))
            .age_group(parse_option("age_group", self.age_group.as_deref()))
            .education_level(parse_option(
                "education_level",
                self.education_level.as_deref(),
            ));
        if let Some(count) = self.num_scenes {
            builder.scene_count(count);
        }
        builder.build().unwrap_or_default()
    }
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query to match against article titles.
    pub query: Option<String>,
}

/// Parse an option field, falling back to the default on unknown values.
fn parse_option<T>(field: &'static str, value: Option<&str>) -> T
where
    T: std::str::FromStr + Default,
{
    let Some(raw) = value else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|_| {
        warn!(field, value = raw, "Unknown option value, using default");
        T::default()
    })
}
