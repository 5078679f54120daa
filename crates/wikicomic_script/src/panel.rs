//! Dialogue extraction and panel instruction construction.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

const FALLBACK_SPEAKER: &str = "Character";
const FALLBACK_LINE: &str = "This is an important moment in our story.";

static DIALOG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)Dialog:\s*([^:]+?):\s*"([^"]+)""#).expect("Valid dialog regex")
});

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^:]+?):\s*"([^"]+)""#).expect("Valid quoted-text regex"));

/// Extract `(speaker, line)` dialogue pairs from a scene block.
///
/// Three tiers: structured `Dialog:` lines first, then any quoted text with
/// a speaker label (excluding style and visual labels), then a generic
/// placeholder. The result is never empty.
pub fn extract_dialogue(block: &str) -> Vec<(String, String)> {
    let mut lines: Vec<(String, String)> = DIALOG_RE
        .captures_iter(block)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
        .collect();

    if lines.is_empty() {
        lines = QUOTED_RE
            .captures_iter(block)
            .filter(|caps| {
                let label = caps[1].to_lowercase();
                !label.contains("style") && !label.contains("visual")
            })
            .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
            .collect();
    }

    if lines.is_empty() {
        warn!("No dialog found in scene prompt, using generic dialog");
        lines.push((FALLBACK_SPEAKER.to_string(), FALLBACK_LINE.to_string()));
    }

    lines
}

/// Rewrite a scene block into a focused image-generation instruction.
///
/// Works from the block's `Visual:` and `Style:` segments, with the
/// extracted dialogue restated as speech-bubble content. When no visual
/// description can be found the block is passed through unchanged.
pub fn panel_instruction(block: &str) -> String {
    let Some(visual) = section(block, "Visual:", &["\nDialog:", "Style:"]) else {
        return block.to_string();
    };
    let style = section(block, "Style:", &[]).unwrap_or("");

    let bubbles = extract_dialogue(block)
        .iter()
        .map(|(speaker, line)| format!("{speaker}: \"{line}\""))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate a detailed comic panel showing:\n\
         {visual}\n\
         \n\
         Speech bubbles:\n\
         {bubbles}\n\
         \n\
         Style details: {style}\n\
         \n\
         Important:\n\
         - Create a high-quality, detailed comic panel with clear characters and setting.\n\
         - Accurately represent the scene exactly as described.\n\
         - Ensure all dialogue is grammatically correct and fits the tone of the scene.\n\
         - Leave appropriate space for dialogue bubbles as part of the composition."
    )
}

/// Text after `marker`, stopped at the earliest of `stops`, trimmed.
fn section<'a>(block: &'a str, marker: &str, stops: &[&str]) -> Option<&'a str> {
    let start = block.find(marker)? + marker.len();
    let rest = &block[start..];
    let end = stops
        .iter()
        .filter_map(|stop| rest.find(stop))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "Scene 2: The Analytical Engine\n\
        Visual: Ada stands beside a brass machine, gesturing at punched cards.\n\
        Dialog: Ada: \"The Engine weaves algebraic patterns.\"\n\
        Dialog: Babbage: \"Just as the loom weaves flowers.\"\n\
        Style: european style with precise line work.";

    #[test]
    fn structured_dialogue_is_extracted_in_order() {
        let dialogue = extract_dialogue(BLOCK);
        assert_eq!(dialogue.len(), 2);
        assert_eq!(dialogue[0].0, "Ada");
        assert_eq!(dialogue[0].1, "The Engine weaves algebraic patterns.");
        assert_eq!(dialogue[1].0, "Babbage");
    }

    #[test]
    fn dialog_marker_is_case_insensitive() {
        let block = "dialog: Ada: \"Lowercase marker.\"";
        let dialogue = extract_dialogue(block);
        assert_eq!(dialogue[0].0, "Ada");
        assert_eq!(dialogue[0].1, "Lowercase marker.");
    }

    #[test]
    fn loose_tier_matches_quoted_text_with_speaker() {
        let dialogue = extract_dialogue("Narrator: \"It began in London.\"");
        assert_eq!(dialogue.len(), 1);
        assert_eq!(dialogue[0].0, "Narrator");
        assert_eq!(dialogue[0].1, "It began in London.");
    }

    #[test]
    fn loose_tier_skips_style_and_visual_labels() {
        for block in [
            "Style: \"noir shadows everywhere\"",
            "Visual: \"an empty street at night\"",
        ] {
            let dialogue = extract_dialogue(block);
            assert_eq!(dialogue.len(), 1);
            assert_eq!(dialogue[0].0, "Character");
        }
    }

    #[test]
    fn fallback_tier_never_returns_empty() {
        for block in ["", "No quotes here at all.", "Visual: only a description."] {
            let dialogue = extract_dialogue(block);
            assert_eq!(dialogue.len(), 1);
            assert_eq!(dialogue[0].0, "Character");
            assert_eq!(dialogue[0].1, "This is an important moment in our story.");
        }
    }

    #[test]
    fn instruction_extracts_visual_and_style() {
        let instruction = panel_instruction(BLOCK);
        assert!(instruction.starts_with("Generate a detailed comic panel showing:"));
        assert!(instruction.contains("Ada stands beside a brass machine"));
        assert!(!instruction.contains("Scene 2: The Analytical Engine"));
        assert!(instruction.contains("Style details: european style with precise line work."));
        assert!(instruction.contains("Ada: \"The Engine weaves algebraic patterns.\""));
        assert!(instruction.contains("Leave appropriate space for dialogue bubbles"));
    }

    #[test]
    fn visual_segment_stops_before_dialogue() {
        let instruction = panel_instruction(BLOCK);
        let visual_line = instruction
            .lines()
            .nth(1)
            .expect("instruction has a visual line");
        assert_eq!(
            visual_line,
            "Ada stands beside a brass machine, gesturing at punched cards."
        );
    }

    #[test]
    fn block_without_visual_passes_through() {
        let block = "Scene 1: A title only, with Dialog: Ada: \"Hi.\"";
        assert_eq!(panel_instruction(block), block);
    }
}
