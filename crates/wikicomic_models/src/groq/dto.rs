//! Serde shapes for the OpenAI-compatible chat completion endpoint.

use serde::{Deserialize, Serialize};
use wikicomic_core::Message;

/// A chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// A chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Model that served the request
    #[serde(default)]
    pub model: String,
    /// Generated choices; the first one is used
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChoiceMessage,
}

/// The assistant message within a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Completion text; null for refusals and tool-only turns
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_lowercase_roles() {
        let request = ChatCompletionRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![
                Message::system("You are a comic writer."),
                Message::user("Write a storyline."),
            ],
            max_tokens: Some(4000),
            temperature: Some(0.7),
            top_p: Some(0.9),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 4000);
    }

    #[test]
    fn request_omits_unset_sampling_fields() {
        let request = ChatCompletionRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![Message::user("Hello")],
            max_tokens: None,
            temperature: None,
            top_p: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
        assert!(json.get("top_p").is_none());
    }

    #[test]
    fn response_parses_first_choice() {
        let body = r##"{
            "id": "chatcmpl-123",
            "model": "llama3-8b-8192",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "# Ada Lovelace: Comic Storyline" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 100, "completion_tokens": 50 }
        }"##;

        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.model, "llama3-8b-8192");
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("# Ada Lovelace: Comic Storyline")
        );
    }

    #[test]
    fn response_tolerates_null_content() {
        let body = r#"{
            "choices": [ { "message": { "role": "assistant", "content": null } } ]
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
