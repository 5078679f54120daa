//! Groq OpenAI-compatible chat completion integration.

mod client;
mod dto;

pub use client::{DEFAULT_CHAT_MODEL, GroqClient};
