//! Provider clients for WikiComic.
//!
//! Three REST integrations power the generation pipeline:
//!
//! - [`WikipediaClient`] resolves and searches articles through the
//!   MediaWiki action API.
//! - [`GroqClient`] writes storylines and scene prompts through Groq's
//!   OpenAI-compatible chat completion endpoint.
//! - [`GeminiImageClient`] renders panels through the Gemini
//!   `generateContent` endpoint with image response modalities.
//!
//! # Example
//!
//! ```no_run
//! use wikicomic_core::ChatRequest;
//! use wikicomic_interface::StoryDriver;
//! use wikicomic_models::GroqClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GroqClient::new()?;
//! let request = ChatRequest::from_prompt("Write a one-panel comic about Ada Lovelace.");
//! let response = driver.generate(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod groq;
mod wikipedia;

pub use gemini::{DEFAULT_IMAGE_MODEL, GeminiImageClient};
pub use groq::{DEFAULT_CHAT_MODEL, GroqClient};
pub use wikipedia::WikipediaClient;
