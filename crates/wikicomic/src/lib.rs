//! WikiComic - Wikipedia articles as comic books
//!
//! WikiComic fetches a Wikipedia article, asks a chat model to condense it
//! into a scene-by-scene storyline, renders each scene with an image model,
//! and serves the finished comic over HTTP alongside its panel images.
//!
//! # Features
//!
//! - **Article Retrieval**: MediaWiki action API lookups with disambiguation
//!   detection and search fallback
//! - **Storyline Generation**: Groq chat completions turn article text into
//!   a storyline and per-scene image prompts
//! - **Panel Rendering**: Gemini image generation, one panel per scene,
//!   persisted under a configurable media root
//! - **Status Tracking**: Pollable progress snapshots for every generation
//!   request
//! - **HTTP API**: Axum service exposing generation, status, comics,
//!   search, and options endpoints
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wikicomic::{ComicOptions, ComicStyle, ServiceConfig, build_state};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::load()?;
//!     let state = build_state(&config)?;
//!
//!     let options = ComicOptions::builder()
//!         .style(ComicStyle::Manga)
//!         .scene_count(5)
//!         .build()?;
//!
//!     let comic_id = state
//!         .pipeline
//!         .run("local-run", "Albert Einstein", options, CancellationToken::new())
//!         .await?;
//!     println!("Generated comic {comic_id}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! WikiComic is organized as a workspace with focused crates:
//!
//! - `wikicomic_core` - Core data types (Comic, Scene, ComicOptions, etc.)
//! - `wikicomic_interface` - Driver and repository trait definitions
//! - `wikicomic_error` - Error types
//! - `wikicomic_script` - Prompt templates and model output parsing
//! - `wikicomic_models` - Wikipedia, Groq, and Gemini clients
//! - `wikicomic_storage` - Panel image persistence
//! - `wikicomic_pipeline` - Generation pipeline and task runner
//! - `wikicomic_server` - HTTP API and service configuration
//!
//! This crate (`wikicomic`) re-exports everything for convenience.

pub use wikicomic_core::*;
pub use wikicomic_error::*;
pub use wikicomic_interface::*;
pub use wikicomic_models::*;
pub use wikicomic_pipeline::*;
pub use wikicomic_script::*;
pub use wikicomic_server::*;
pub use wikicomic_storage::*;
