//! Groq chat completion driver using reqwest.

use crate::groq::dto::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use wikicomic_core::{ChatRequest, ChatResponse};
use wikicomic_error::{ModelError, ModelErrorKind, WikicomicResult};
use wikicomic_interface::StoryDriver;

/// Default chat model for storyline and scene prompt generation.
pub const DEFAULT_CHAT_MODEL: &str = "llama3-8b-8192";

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Groq chat completion driver.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl GroqClient {
    /// Creates a new Groq driver with the default model.
    ///
    /// Reads the API key from the `GROQ_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the HTTP client cannot be
    /// initialized.
    #[instrument(skip_all)]
    pub fn new() -> WikicomicResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            ModelError::new(ModelErrorKind::MissingApiKey("GROQ_API_KEY".to_string()))
        })?;

        Self::with_api_key(api_key, DEFAULT_CHAT_MODEL.to_string())
    }

    /// Creates a new Groq driver with an explicit API key and model.
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

        debug!(model = %model, "Created Groq driver");

        Ok(Self {
            client,
            api_key,
            model,
            api_url: API_URL.to_string(),
        })
    }
}

#[async_trait]
impl StoryDriver for GroqClient {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn generate(&self, req: &ChatRequest) -> WikicomicResult<ChatResponse> {
        let model = req.model.clone().unwrap_or_else(|| self.model.clone());
        let body = ChatCompletionRequest {
            model: model.clone(),
            messages: req.messages.clone(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            top_p: req.top_p,
        };

        debug!(
            url = %self.api_url,
            messages = body.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
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

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelError::new(ModelErrorKind::Deserialization(e.to_string()))
        })?;

        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ModelError::new(ModelErrorKind::EmptyCompletion(model.clone())))?
            .to_string();

        debug!(content_len = content.len(), "Received completion");

        let model = if completion.model.is_empty() {
            model
        } else {
            completion.model
        };

        Ok(ChatResponse { content, model })
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
