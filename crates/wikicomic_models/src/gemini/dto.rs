//! Serde shapes for the Gemini `generateContent` endpoint.
//!
//! Field names follow the wire protocol's camelCase convention.

use serde::{Deserialize, Serialize};

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<Content>,
    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A content block within a request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Producing role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts of the content
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text part
    Text(TextPart),
    /// Inline binary part
    InlineData(InlineDataPart),
}

/// Text part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    /// The text
    pub text: String,
}

/// Inline data part wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    /// The wrapped payload
    pub inline_data: InlineData,
}

/// Base64-encoded binary payload with its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Generation configuration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Modalities the model may respond with
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_modalities: Vec<String>,
}

/// A `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; the first one is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content
    pub content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text(TextPart {
                    text: "A comic panel".to_string(),
                })],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "A comic panel");
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["TEXT", "IMAGE"])
        );
    }

    #[test]
    fn response_parses_mixed_parts() {
        let body = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "Here is your panel." },
                            { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
                        ]
                    }
                }
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let parts = &parsed.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[0], Part::Text(_)));
        match &parts[1] {
            Part::InlineData(part) => {
                assert_eq!(part.inline_data.mime_type, "image/png");
                assert_eq!(part.inline_data.data, "aGVsbG8=");
            }
            Part::Text(_) => panic!("expected inline data part"),
        }
    }

    #[test]
    fn response_tolerates_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
