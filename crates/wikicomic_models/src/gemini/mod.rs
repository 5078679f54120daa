//! Gemini image generation integration.

mod client;
mod dto;

pub use client::{DEFAULT_IMAGE_MODEL, GeminiImageClient};
