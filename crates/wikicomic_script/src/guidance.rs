//! Style, audience, and education guidance tables for prompt construction.

use wikicomic_core::{AgeGroup, ComicStyle, EducationLevel};

/// Art direction for a comic style, embedded in the scene-prompt request.
///
/// Styles without a dedicated entry get a generic directive built from the
/// style name.
pub fn style_guidance(style: ComicStyle) -> String {
    match style {
        ComicStyle::Manga => "Use manga-specific visual elements like speed lines, expressive emotions, and distinctive panel layouts. Character eyes should be larger, with detailed hair and simplified facial features. Use black and white with screen tones for shading.".to_string(),
        ComicStyle::Superhero => "Use bold colors, dynamic poses with exaggerated anatomy, dramatic lighting, and action-oriented compositions. Include detailed musculature and costumes with strong outlines and saturated colors.".to_string(),
        ComicStyle::Cartoon => "Use simplified, exaggerated character features with bold outlines. Employ bright colors, expressive faces, and playful physics. Include visual effects like motion lines and impact stars.".to_string(),
        ComicStyle::Noir => "Use high-contrast black and white or muted colors with dramatic shadows. Feature low-key lighting, rain effects, and urban settings. Characters should have realistic proportions with hardboiled expressions.".to_string(),
        ComicStyle::European => "Use detailed backgrounds with architectural precision and clear line work. Character designs should be semi-realistic with consistent proportions. Panel layouts should be regular and methodical.".to_string(),
        ComicStyle::Indie => "Use unconventional art styles with personal flair. Panel layouts can be experimental and fluid. Line work may be sketchy or deliberately unpolished. Colors can be watercolor-like or limited palette.".to_string(),
        ComicStyle::Retro => "Use halftone dots for shading, slightly faded colors, and classic panel compositions. Character designs should reflect the comics of the 50s-70s with simplified but distinctive features.".to_string(),
        ComicStyle::ComicBook | ComicStyle::GraphicNovel => format!(
            "Incorporate distinctive visual elements of {} style consistently in all panels.",
            style.as_str()
        ),
    }
}

/// Audience-appropriateness directive for an age group.
pub fn age_guidance(age_group: AgeGroup) -> &'static str {
    match age_group {
        AgeGroup::Kids => "Use simple, clear vocabulary and straightforward concepts. Avoid complex themes, frightening imagery, or adult situations. Characters should be expressive and appealing. Educational content should be presented in an engaging, accessible way.",
        AgeGroup::Teens => "Use relatable language and themes important to adolescents. Include more nuanced emotional content and moderate complexity. Educational aspects can challenge readers while remaining accessible.",
        AgeGroup::General => "Balance accessibility with depth. Include some complexity in both themes and visuals while remaining broadly appropriate. Educational content should be informative without being overly technical.",
        AgeGroup::Adult => "Include sophisticated themes, complex characterizations, and nuanced storytelling. Educational content can be presented with full complexity and technical detail where appropriate.",
    }
}

/// Content-complexity directive for an education level.
pub fn education_guidance(level: EducationLevel) -> &'static str {
    match level {
        EducationLevel::Basic => "Use simple vocabulary, clear explanations, and focus on foundational concepts. Break down complex ideas into easily digestible components with examples.",
        EducationLevel::Standard => "Use moderate vocabulary and present concepts with appropriate depth for general understanding. Balance educational content with narrative engagement.",
        EducationLevel::Advanced => "Use field-specific terminology where appropriate and explore concepts in depth. Present nuanced details and sophisticated analysis of the subject matter.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_style_has_guidance() {
        for style in ComicStyle::iter() {
            assert!(!style_guidance(style).is_empty());
        }
    }

    #[test]
    fn untabled_styles_get_generic_guidance() {
        let guidance = style_guidance(ComicStyle::GraphicNovel);
        assert!(guidance.contains("graphic novel"));
        assert!(guidance.starts_with("Incorporate distinctive visual elements"));
    }

    #[test]
    fn manga_guidance_is_specific() {
        assert!(style_guidance(ComicStyle::Manga).contains("screen tones"));
    }

    #[test]
    fn age_and_education_tables_are_total() {
        assert!(age_guidance(AgeGroup::Kids).contains("simple"));
        assert!(age_guidance(AgeGroup::Adult).contains("sophisticated"));
        assert!(education_guidance(EducationLevel::Advanced).contains("field-specific"));
    }
}
