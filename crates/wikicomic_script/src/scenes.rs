//! Scene-prompt request construction and response normalization.

use crate::guidance::{age_guidance, education_guidance, style_guidance};
use crate::storyline::{CHAT_MAX_TOKENS, CHAT_TEMPERATURE, CHAT_TOP_P};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;
use wikicomic_core::{ChatRequest, ComicOptions, Message};

static SCENE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Scene \d+:").expect("Valid scene marker regex"));

const SCENE_SYSTEM_PROMPT: &str = "You are an expert comic book artist and writer who creates detailed, engaging scene descriptions for comic panels with consistent characters and storylines. You always ensure dialog is grammatically correct and include specific dialog text for each scene.";

/// Build the chat request that turns a storyline into scene prompt blocks.
pub fn scene_prompts_request(title: &str, storyline: &str, options: &ComicOptions) -> ChatRequest {
    let style = *options.style();
    let age = *options.age_group();
    let education = *options.education_level();
    let num_scenes = *options.scene_count();
    let style_note = style_guidance(style);
    let age_note = age_guidance(age);
    let education_note = education_guidance(education);

    let prompt = format!(
        r#"Based on the following comic storyline about "{title}", create exactly {num_scenes} sequential scene prompts for generating comic panels.

Each scene prompt MUST:
1. Follow a logical narrative sequence from beginning to end
2. Include DETAILED visual descriptions of the scene, setting, characters, and actions
3. Include SPECIFIC dialogue text between characters (this is crucial as dialogue text will be directly included in speech bubbles)
4. Ensure all dialogue is grammatically correct and appropriate for the target audience
5. Maintain character consistency throughout all scenes
6. Be self-contained but connect logically to the previous and next scenes
7. Incorporate specific visual elements from the {style} comic art style

IMPORTANT PARAMETERS TO FOLLOW:
- Comic Style: {style} - {style_note}
- Age Group: {age} - {age_note}
- Education Level: {education} - {education_note}

Here is the comic storyline to convert into scene prompts:

{storyline}

FORMAT EACH SCENE PROMPT AS:
Scene [number]: [Brief scene title]
Visual: [Extremely detailed visual description of the scene including setting, characters, positions, expressions, actions, and any specific visual elements]
Dialog: [Character 1 name]: "[Exact dialogue text for speech bubble]"
Dialog: [Character 2 name]: "[Exact dialogue text for speech bubble]"
Style: {style} style with [specific stylistic elements to emphasize].

PROVIDE EXACTLY {num_scenes} SCENES IN SEQUENTIAL ORDER.
MAKE SURE EACH SCENE HAS AT LEAST ONE DIALOG LINE, as these will be directly included in speech bubbles.
ENSURE ALL DIALOG TEXT IS GRAMMATICALLY CORRECT and appropriate for the target audience.
SCENE DESCRIPTIONS MUST BE EXTREMELY DETAILED to ensure the image generator can create accurate images."#
    );

    ChatRequest {
        messages: vec![Message::system(SCENE_SYSTEM_PROMPT), Message::user(prompt)],
        max_tokens: Some(CHAT_MAX_TOKENS),
        temperature: Some(CHAT_TEMPERATURE),
        top_p: Some(CHAT_TOP_P),
        model: None,
    }
}

/// Split raw LLM output into blocks on `Scene N:` markers.
///
/// Text before the first marker is dropped; a response with no markers
/// yields an empty list.
pub fn split_scenes(raw: &str) -> Vec<String> {
    let starts: Vec<usize> = SCENE_MARKER_RE
        .find_iter(raw)
        .map(|found| found.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = starts.get(index + 1).copied().unwrap_or(raw.len());
            raw[start..end].trim().to_string()
        })
        .collect()
}

/// Generic scene block used to pad short responses.
pub fn filler_scene(scene_number: u32, title: &str, options: &ComicOptions) -> String {
    let style = *options.style();
    let age = *options.age_group();
    format!(
        "Scene {scene_number}: Additional scene from {title}\n\
         Visual: A character from the story stands in a relevant setting from {title}, looking thoughtful.\n\
         Dialog: Character: \"This is an important moment in the story of {title}.\"\n\
         Style: {style} style with appropriate elements for {age} audience."
    )
}

/// Append a default dialogue line when a block has none.
pub fn ensure_dialogue(block: String, scene_number: u32, title: &str) -> String {
    if block.contains("Dialog:") {
        return block;
    }

    warn!(
        scene = scene_number,
        "Scene prompt missing dialog, appending default line"
    );
    format!(
        "{block}\nDialog: Character: \"This is scene {scene_number} of our story about {title}.\""
    )
}

/// Force the parsed scene list to exactly the requested count.
///
/// Short responses are padded with filler blocks and long responses are
/// truncated. Every returned block contains at least one dialogue line.
pub fn normalize_scenes(raw: &str, title: &str, options: &ComicOptions) -> Vec<String> {
    let expected = *options.scene_count() as usize;
    let mut scenes = split_scenes(raw);

    if scenes.len() != expected {
        warn!(
            parsed = scenes.len(),
            expected = expected,
            "Scene count mismatch, padding or truncating"
        );
    }

    while scenes.len() < expected {
        let scene_number = scenes.len() as u32 + 1;
        scenes.push(filler_scene(scene_number, title, options));
    }
    scenes.truncate(expected);

    scenes
        .into_iter()
        .enumerate()
        .map(|(index, block)| ensure_dialogue(block, index as u32 + 1, title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_count(scene_count: u32) -> ComicOptions {
        ComicOptions::builder()
            .scene_count(scene_count)
            .build()
            .unwrap()
    }

    fn blocks(count: usize) -> String {
        (1..=count)
            .map(|n| {
                format!(
                    "Scene {n}: Moment {n}\nVisual: Setting {n}.\nDialog: Ada: \"Line {n}.\"\nStyle: manga style."
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn split_finds_each_marker() {
        let scenes = split_scenes(&blocks(4));
        assert_eq!(scenes.len(), 4);
        assert!(scenes[0].starts_with("Scene 1:"));
        assert!(scenes[3].starts_with("Scene 4:"));
        assert!(scenes[2].contains("Dialog: Ada"));
    }

    #[test]
    fn split_drops_preamble_text() {
        let raw = format!("Here are your scenes!\n\n{}", blocks(2));
        let scenes = split_scenes(&raw);
        assert_eq!(scenes.len(), 2);
        assert!(scenes[0].starts_with("Scene 1:"));
    }

    #[test]
    fn split_of_markerless_text_is_empty() {
        assert!(split_scenes("The model refused to answer.").is_empty());
    }

    #[test]
    fn normalize_pads_short_responses() {
        let scenes = normalize_scenes(&blocks(2), "Ada Lovelace", &options_with_count(5));
        assert_eq!(scenes.len(), 5);
        assert!(scenes[2].starts_with("Scene 3: Additional scene from Ada Lovelace"));
        assert!(scenes[4].contains("Dialog: Character:"));
    }

    #[test]
    fn normalize_truncates_long_responses() {
        let scenes = normalize_scenes(&blocks(12), "Ada Lovelace", &options_with_count(4));
        assert_eq!(scenes.len(), 4);
        assert!(scenes[3].starts_with("Scene 4:"));
    }

    #[test]
    fn normalize_repairs_missing_dialogue() {
        let raw = "Scene 1: Silent panel\nVisual: An empty room.\nStyle: noir style.";
        let scenes = normalize_scenes(raw, "Ada Lovelace", &options_with_count(3));
        assert!(scenes[0].contains("Dialog: Character: \"This is scene 1 of our story about Ada Lovelace.\""));
    }

    #[test]
    fn normalize_holds_count_invariant_across_range() {
        for count in 3..=15u32 {
            let scenes = normalize_scenes(&blocks(6), "Topic", &options_with_count(count));
            assert_eq!(scenes.len(), count as usize);
            assert!(scenes.iter().all(|scene| scene.contains("Dialog:")));
        }
    }

    #[test]
    fn normalize_of_empty_response_is_all_filler() {
        let scenes = normalize_scenes("", "Topic", &options_with_count(3));
        assert_eq!(scenes.len(), 3);
        for (index, scene) in scenes.iter().enumerate() {
            assert!(scene.starts_with(&format!("Scene {}: Additional scene", index + 1)));
        }
    }

    #[test]
    fn request_embeds_guidance_and_count() {
        let options = options_with_count(6);
        let request = scene_prompts_request("Ada Lovelace", "A storyline.", &options);
        let prompt = &request.messages[1].content;

        assert!(prompt.contains("create exactly 6 sequential scene prompts"));
        assert!(prompt.contains("PROVIDE EXACTLY 6 SCENES"));
        assert!(prompt.contains("Comic Style: comic book"));
        assert!(prompt.contains("Age Group: general"));
        assert!(prompt.contains("Education Level: standard"));
        assert!(request.messages[0].content.contains("comic book artist"));
    }
}
