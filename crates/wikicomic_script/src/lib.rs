//! Prompt construction and LLM-output parsing for comic generation.
//!
//! LLM responses are free text that only loosely follows the requested
//! layout. This crate owns both sides of that contract: the storyline and
//! scene-prompt templates sent to the chat model, and the best-effort
//! parsers that force the response into exactly the requested number of
//! scene blocks and rewrite each block into an image-generation
//! instruction.
//!
//! # Example
//!
//! ```
//! use wikicomic_core::ComicOptions;
//! use wikicomic_script::normalize_scenes;
//!
//! let raw = "Scene 1: Opening\nVisual: A lab.\nDialog: Ada: \"Let us begin.\"";
//! let options = ComicOptions::builder().scene_count(3).build().unwrap();
//!
//! let scenes = normalize_scenes(raw, "Ada Lovelace", &options);
//! assert_eq!(scenes.len(), 3);
//! assert!(scenes.iter().all(|scene| scene.contains("Dialog:")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod guidance;
mod panel;
mod scenes;
mod storyline;

pub use guidance::{age_guidance, education_guidance, style_guidance};
pub use panel::{extract_dialogue, panel_instruction};
pub use scenes::{
    ensure_dialogue, filler_scene, normalize_scenes, scene_prompts_request, split_scenes,
};
pub use storyline::{MAX_ARTICLE_CHARS, storyline_prompt, storyline_request, truncate_article};
