//! Trait definitions for providers, lookup, and stores.

use crate::{ArticleLookup, SearchResults};
use async_trait::async_trait;
use wikicomic_core::{
    ChatRequest, ChatResponse, Comic, ComicStatus, ImageRequest, ImageResponse, Scene,
    StatusRecord,
};
use wikicomic_error::WikicomicResult;

/// Chat completion backend used to write storylines and scene prompts.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate a completion for the given chat request.
    async fn generate(&self, req: &ChatRequest) -> WikicomicResult<ChatResponse>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3-8b-8192").
    fn model_name(&self) -> &str;
}

/// Image generation backend used to render panels.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Render an image for the given instruction.
    async fn render(&self, req: &ImageRequest) -> WikicomicResult<ImageResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-exp-image-generation").
    fn model_name(&self) -> &str;
}

/// Encyclopedia lookup used to resolve and search article titles.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Resolve a title to its article content.
    ///
    /// Returns [`ArticleLookup::Disambiguation`] when the title matches a
    /// disambiguation page. Not-found titles and exhausted retries surface
    /// as errors.
    async fn fetch(&self, title: &str) -> WikicomicResult<ArticleLookup>;

    /// Search for article titles matching a free-text query.
    ///
    /// An empty or whitespace query is a validation error.
    async fn search(&self, query: &str, limit: u32) -> WikicomicResult<SearchResults>;
}

/// Store of comic records and their scenes.
///
/// Identifiers are monotonically increasing and never reused. The pipeline
/// is the single writer for any one comic; implementations must tolerate
/// concurrent writers across different comics.
#[async_trait]
pub trait ComicRepository: Send + Sync {
    /// Create a comic record in `pending` status, optionally seeding the
    /// storyline. Returns the stored record.
    async fn create(
        &self,
        title: &str,
        source_url: &str,
        storyline: Option<&str>,
    ) -> WikicomicResult<Comic>;

    /// Set the storyline text for a comic.
    async fn set_storyline(&self, comic_id: i64, storyline: &str) -> WikicomicResult<()>;

    /// Append a scene record to a comic.
    async fn add_scene(
        &self,
        comic_id: i64,
        number: u32,
        prompt: &str,
        image_path: &str,
    ) -> WikicomicResult<Scene>;

    /// Set the lifecycle status, with an error message for failures.
    async fn set_status(
        &self,
        comic_id: i64,
        status: ComicStatus,
        error: Option<String>,
    ) -> WikicomicResult<()>;

    /// Fetch a comic with its scenes.
    async fn get(&self, comic_id: i64) -> WikicomicResult<Comic>;

    /// List every comic, oldest first.
    async fn list_all(&self) -> WikicomicResult<Vec<Comic>>;
}

/// Short-lived progress tracker keyed by request identifier.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Overwrite the record for a request and reset its expiry window.
    async fn put(&self, request_id: &str, record: StatusRecord) -> WikicomicResult<()>;

    /// Fetch the current record, or `None` if absent or expired.
    async fn get(&self, request_id: &str) -> WikicomicResult<Option<StatusRecord>>;
}
