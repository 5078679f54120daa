//! Request and response types for panel image generation.

use serde::{Deserialize, Serialize};

/// An image generation request sent to an image driver.
///
/// # Examples
///
/// ```
/// use wikicomic_core::ImageRequest;
///
/// let request = ImageRequest {
///     prompt: "A storming crowd before the Bastille, manga style".to_string(),
///     model: None,
/// };
///
/// assert!(request.prompt.contains("Bastille"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageRequest {
    /// The full image-generation instruction
    pub prompt: String,
    /// Model identifier, overriding the driver default
    pub model: Option<String>,
}

impl ImageRequest {
    /// Build a request from a prompt with the driver's default model.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }
}

/// The response from an image generation call.
///
/// The Gemini image endpoint interleaves text commentary with inline image
/// data; the first image part is decoded into `data` and any text parts are
/// preserved in `commentary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// MIME type of the image, when reported by the provider
    pub mime: Option<String>,
    /// Decoded binary image data
    pub data: Vec<u8>,
    /// Text parts accompanying the image, if any
    pub commentary: Option<String>,
}
