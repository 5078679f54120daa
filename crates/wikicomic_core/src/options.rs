//! Comic generation options and their bounds.

use serde::{Deserialize, Serialize};

/// Minimum number of scenes in a generated comic.
pub const SCENE_COUNT_MIN: u32 = 3;
/// Maximum number of scenes in a generated comic.
pub const SCENE_COUNT_MAX: u32 = 15;
/// Default number of scenes when the caller does not specify one.
pub const SCENE_COUNT_DEFAULT: u32 = 8;

/// Visual style of the generated comic.
///
/// # Examples
///
/// ```
/// use wikicomic_core::ComicStyle;
///
/// assert_eq!(ComicStyle::default().as_str(), "comic book");
/// assert_eq!("manga".parse::<ComicStyle>(), Ok(ComicStyle::Manga));
/// assert!("cubist".parse::<ComicStyle>().is_err());
/// ```
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
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ComicStyle {
    /// Japanese manga style
    #[display("manga")]
    #[serde(rename = "manga")]
    Manga,
    /// American superhero comics
    #[display("superhero")]
    #[serde(rename = "superhero")]
    Superhero,
    /// Animated cartoon style
    #[display("cartoon")]
    #[serde(rename = "cartoon")]
    Cartoon,
    /// Film noir, high-contrast black and white
    #[display("noir")]
    #[serde(rename = "noir")]
    Noir,
    /// European album style (ligne claire)
    #[display("european")]
    #[serde(rename = "european")]
    European,
    /// Independent comics style
    #[display("indie")]
    #[serde(rename = "indie")]
    Indie,
    /// Mid-century retro style
    #[display("retro")]
    #[serde(rename = "retro")]
    Retro,
    /// Conventional comic book style
    #[default]
    #[display("comic book")]
    #[serde(rename = "comic book")]
    ComicBook,
    /// Long-form graphic novel style
    #[display("graphic novel")]
    #[serde(rename = "graphic novel")]
    GraphicNovel,
}

impl ComicStyle {
    /// Canonical string form used in the API and prompt templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComicStyle::Manga => "manga",
            ComicStyle::Superhero => "superhero",
            ComicStyle::Cartoon => "cartoon",
            ComicStyle::Noir => "noir",
            ComicStyle::European => "european",
            ComicStyle::Indie => "indie",
            ComicStyle::Retro => "retro",
            ComicStyle::ComicBook => "comic book",
            ComicStyle::GraphicNovel => "graphic novel",
        }
    }
}

impl std::str::FromStr for ComicStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manga" => Ok(ComicStyle::Manga),
            "superhero" => Ok(ComicStyle::Superhero),
            "cartoon" => Ok(ComicStyle::Cartoon),
            "noir" => Ok(ComicStyle::Noir),
            "european" => Ok(ComicStyle::European),
            "indie" => Ok(ComicStyle::Indie),
            "retro" => Ok(ComicStyle::Retro),
            "comic book" => Ok(ComicStyle::ComicBook),
            "graphic novel" => Ok(ComicStyle::GraphicNovel),
            _ => Err(format!("Unknown comic style: {}", s)),
        }
    }
}

/// Approximate length of the generated storyline.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetLength {
    /// About 500 words
    #[display("short")]
    Short,
    /// About 1000 words
    #[default]
    #[display("medium")]
    Medium,
    /// About 2000 words
    #[display("long")]
    Long,
}

impl TargetLength {
    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLength::Short => "short",
            TargetLength::Medium => "medium",
            TargetLength::Long => "long",
        }
    }

    /// Approximate word count requested from the storyline model.
    pub fn word_count(&self) -> u32 {
        match self {
            TargetLength::Short => 500,
            TargetLength::Medium => 1000,
            TargetLength::Long => 2000,
        }
    }
}

impl std::str::FromStr for TargetLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(TargetLength::Short),
            "medium" => Ok(TargetLength::Medium),
            "long" => Ok(TargetLength::Long),
            _ => Err(format!("Unknown target length: {}", s)),
        }
    }
}

/// Intended audience age group.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Young children
    #[display("kids")]
    Kids,
    /// Teenagers
    #[display("teens")]
    Teens,
    /// General audience
    #[default]
    #[display("general")]
    General,
    /// Adult readers
    #[display("adult")]
    Adult,
}

impl AgeGroup {
    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Kids => "kids",
            AgeGroup::Teens => "teens",
            AgeGroup::General => "general",
            AgeGroup::Adult => "adult",
        }
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kids" => Ok(AgeGroup::Kids),
            "teens" => Ok(AgeGroup::Teens),
            "general" => Ok(AgeGroup::General),
            "adult" => Ok(AgeGroup::Adult),
            _ => Err(format!("Unknown age group: {}", s)),
        }
    }
}

/// Depth of explanatory content in the storyline.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    /// Simple vocabulary, core facts only
    #[display("basic")]
    Basic,
    /// Balanced depth
    #[default]
    #[display("standard")]
    Standard,
    /// Full detail, technical vocabulary allowed
    #[display("advanced")]
    Advanced,
}

impl EducationLevel {
    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Basic => "basic",
            EducationLevel::Standard => "standard",
            EducationLevel::Advanced => "advanced",
        }
    }
}

impl std::str::FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(EducationLevel::Basic),
            "standard" => Ok(EducationLevel::Standard),
            "advanced" => Ok(EducationLevel::Advanced),
            _ => Err(format!("Unknown education level: {}", s)),
        }
    }
}

/// Options controlling a comic generation run.
///
/// Unset fields take the service defaults; the scene count is clamped to
/// the supported range by [`ComicOptions::normalized`].
///
/// # Examples
///
/// ```
/// use wikicomic_core::{ComicOptions, ComicStyle};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ComicOptions::builder()
///     .style(ComicStyle::Manga)
///     .scene_count(5)
///     .build()?;
///
/// assert_eq!(*options.scene_count(), 5);
/// assert_eq!(*ComicOptions::default().scene_count(), 8);
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct ComicOptions {
    /// Visual style of the comic.
    #[serde(default)]
    style: ComicStyle,

    /// Approximate storyline length.
    #[serde(default)]
    length: TargetLength,

    /// Number of scenes to generate.
    #[serde(default = "default_scene_count")]
    scene_count: u32,

    /// Intended audience age group.
    #[serde(default)]
    age_group: AgeGroup,

    /// Depth of explanatory content.
    #[serde(default)]
    education_level: EducationLevel,
}

fn default_scene_count() -> u32 {
    SCENE_COUNT_DEFAULT
}

impl Default for ComicOptions {
    fn default() -> Self {
        Self {
            style: ComicStyle::default(),
            length: TargetLength::default(),
            scene_count: SCENE_COUNT_DEFAULT,
            age_group: AgeGroup::default(),
            education_level: EducationLevel::default(),
        }
    }
}

impl ComicOptions {
    /// Creates a new options builder.
    pub fn builder() -> ComicOptionsBuilder {
        ComicOptionsBuilder::default()
    }

    /// Returns a copy with the scene count clamped to the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikicomic_core::{ComicOptions, SCENE_COUNT_MAX, SCENE_COUNT_MIN};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let too_many = ComicOptions::builder().scene_count(40).build()?;
    /// assert_eq!(*too_many.normalized().scene_count(), SCENE_COUNT_MAX);
    ///
    /// let too_few = ComicOptions::builder().scene_count(1).build()?;
    /// assert_eq!(*too_few.normalized().scene_count(), SCENE_COUNT_MIN);
    /// # Ok(())
    /// # }
    /// ```
    pub fn normalized(mut self) -> Self {
        self.scene_count = self.scene_count.clamp(SCENE_COUNT_MIN, SCENE_COUNT_MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn style_round_trips_through_canonical_names() {
        for style in ComicStyle::iter() {
            let parsed: ComicStyle = style.as_str().parse().unwrap();
            assert_eq!(parsed, style);
            assert_eq!(format!("{}", style), style.as_str());
        }
    }

    #[test]
    fn length_maps_to_word_counts() {
        assert_eq!(TargetLength::Short.word_count(), 500);
        assert_eq!(TargetLength::Medium.word_count(), 1000);
        assert_eq!(TargetLength::Long.word_count(), 2000);
    }

    #[test]
    fn normalized_clamps_scene_count() {
        let options = ComicOptions::builder().scene_count(100).build().unwrap();
        assert_eq!(*options.normalized().scene_count(), SCENE_COUNT_MAX);

        let options = ComicOptions::builder().scene_count(0).build().unwrap();
        assert_eq!(*options.normalized().scene_count(), SCENE_COUNT_MIN);

        let options = ComicOptions::builder().scene_count(8).build().unwrap();
        assert_eq!(*options.normalized().scene_count(), 8);
    }
}
