//! Gemini image generation driver using reqwest.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, TextPart,
};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use wikicomic_core::{ImageRequest, ImageResponse};
use wikicomic_error::{ModelError, ModelErrorKind, WikicomicResult};
use wikicomic_interface::ImageDriver;

/// Default model for panel rendering.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Gemini image generation driver.
///
/// Requests both text and image response modalities; the first inline image
/// part is decoded and any text parts are kept as commentary.
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiImageClient {
    /// Creates a new Gemini driver with the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the HTTP client cannot be
    /// initialized.
    #[instrument(skip_all)]
    pub fn new() -> WikicomicResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            ModelError::new(ModelErrorKind::MissingApiKey("GEMINI_API_KEY".to_string()))
        })?;

        Self::with_api_key(api_key, DEFAULT_IMAGE_MODEL.to_string())
    }

    /// Creates a new Gemini driver with an explicit API key and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn with_api_key(api_key: String, model: String) -> WikicomicResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %model, "Created Gemini driver");

        Ok(Self {
            client,
            api_key,
            model,
            base_url: API_BASE.to_string(),
        })
    }
}

#[async_trait]
impl ImageDriver for GeminiImageClient {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn render(&self, req: &ImageRequest) -> WikicomicResult<ImageResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model);
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text(TextPart {
                    text: req.prompt.clone(),
                })],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            }),
        };

        debug!(
            model = %model,
            prompt_len = req.prompt.len(),
            "Sending image generation request"
        );

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            ModelError::new(ModelErrorKind::ApiRequest(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, message = %message, "API error");
            return Err(ModelError::new(ModelErrorKind::Http {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelError::new(ModelErrorKind::Deserialization(e.to_string()))
        })?;

        let image = extract_image(&completion)?;

        debug!(
            bytes = image.data.len(),
            mime = image.mime.as_deref().unwrap_or("unknown"),
            "Received image"
        );

        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Pull the first inline image out of a response, collecting text parts as
/// commentary.
fn extract_image(response: &GenerateContentResponse) -> Result<ImageResponse, ModelError> {
    let parts = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let mut commentary = Vec::new();
    let mut image: Option<(&str, &str)> = None;

    for part in parts {
        match part {
            Part::Text(text) => {
                let trimmed = text.text.trim();
                if !trimmed.is_empty() {
                    commentary.push(trimmed.to_string());
                }
            }
            Part::InlineData(data) => {
                if image.is_none() {
                    image = Some((&data.inline_data.mime_type, &data.inline_data.data));
                }
            }
        }
    }

    let (mime, encoded) = image.ok_or_else(|| ModelError::new(ModelErrorKind::MissingImageData))?;

    let data = STANDARD
        .decode(encoded)
        .map_err(|e| ModelError::new(ModelErrorKind::Base64Decode(e.to_string())))?;

    Ok(ImageResponse {
        mime: Some(mime.to_string()),
        data,
        commentary: if commentary.is_empty() {
            None
        } else {
            Some(commentary.join("\n"))
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn extracts_first_image_and_commentary() {
        let response = response_from(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "parts": [
                                { "text": "Here is the panel. " },
                                { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } },
                                { "inlineData": { "mimeType": "image/jpeg", "data": "d29ybGQ=" } }
                            ]
                        }
                    }
                ]
            }"#,
        );

        let image = extract_image(&response).unwrap();
        assert_eq!(image.data, b"hello");
        assert_eq!(image.mime.as_deref(), Some("image/png"));
        assert_eq!(image.commentary.as_deref(), Some("Here is the panel."));
    }

    #[test]
    fn text_only_response_is_missing_image_data() {
        let response = response_from(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "I cannot draw that." } ] } }
                ]
            }"#,
        );

        let err = extract_image(&response).unwrap_err();
        assert_eq!(err.kind, ModelErrorKind::MissingImageData);
    }

    #[test]
    fn empty_response_is_missing_image_data() {
        let response = response_from("{}");
        let err = extract_image(&response).unwrap_err();
        assert_eq!(err.kind, ModelErrorKind::MissingImageData);
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let response = response_from(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "parts": [
                                { "inlineData": { "mimeType": "image/png", "data": "not~base64" } }
                            ]
                        }
                    }
                ]
            }"#,
        );

        let err = extract_image(&response).unwrap_err();
        assert!(matches!(err.kind, ModelErrorKind::Base64Decode(_)));
    }
}
