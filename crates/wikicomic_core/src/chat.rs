//! Request and response types for chat completion.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A chat completion request sent to a story driver.
///
/// # Examples
///
/// ```
/// use wikicomic_core::{ChatRequest, Message, Role};
///
/// let request = ChatRequest {
///     messages: vec![Message {
///         role: Role::User,
///         content: "Summarize the French Revolution as a comic.".to_string(),
///     }],
///     max_tokens: Some(4000),
///     temperature: Some(0.7),
///     top_p: Some(0.9),
///     model: None,
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(4000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Nucleus sampling cutoff (0.0 to 1.0)
    pub top_p: Option<f32>,
    /// Model identifier, overriding the driver default
    pub model: Option<String>,
}

impl ChatRequest {
    /// Build a single-turn user request with the driver's default parameters.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            ..Self::default()
        }
    }
}

/// The response from a chat completion call.
///
/// # Examples
///
/// ```
/// use wikicomic_core::ChatResponse;
///
/// let response = ChatResponse {
///     content: "Scene 1: The Bastille...".to_string(),
///     model: "llama3-8b-8192".to_string(),
/// };
///
/// assert!(response.content.starts_with("Scene 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated completion text
    pub content: String,
    /// The model that produced the completion
    pub model: String,
}
