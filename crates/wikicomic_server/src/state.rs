//! Shared application state and its composition root.

use crate::ServiceConfig;
use std::sync::Arc;
use tracing::{info, instrument};
use wikicomic_error::{ModelError, ModelErrorKind, WikicomicResult};
use wikicomic_interface::{ArticleSource, ComicRepository, ImageDriver, StatusStore, StoryDriver};
use wikicomic_models::{GeminiImageClient, GroqClient, WikipediaClient};
use wikicomic_pipeline::{
    ComicPipeline, InMemoryComicRepository, InMemoryStatusStore, PanelRenderer, StorylineWriter,
    TaskRunner,
};
use wikicomic_storage::PanelStore;

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    /// The generation pipeline; also the route to the repository and status store.
    pub pipeline: Arc<ComicPipeline>,
    /// Article lookup, used directly by the search endpoint.
    pub articles: Arc<dyn ArticleSource>,
    /// Bounded runner generation futures are submitted to.
    pub runner: Arc<TaskRunner>,
    /// Maximum article titles returned per search.
    pub search_limit: u32,
}

impl AppState {
    /// Creates new application state.
    pub fn new(
        pipeline: Arc<ComicPipeline>,
        articles: Arc<dyn ArticleSource>,
        runner: Arc<TaskRunner>,
        search_limit: u32,
    ) -> Self {
        Self {
            pipeline,
            articles,
            runner,
            search_limit,
        }
    }
}

/// Read a provider API key from the environment.
fn require_env(name: &str) -> WikicomicResult<String> {
    std::env::var(name)
        .map_err(|_| ModelError::new(ModelErrorKind::MissingApiKey(name.to_string())).into())
}

/// Assemble production state from configuration.
///
/// Wires the Groq and Gemini clients (models from configuration, keys from
/// `GROQ_API_KEY` / `GEMINI_API_KEY`), the Wikipedia client, the panel
/// store under the configured media root, and fresh in-memory stores.
///
/// # Errors
///
/// Returns an error if an API key is missing, a client cannot be built,
/// or the media root cannot be created.
#[instrument(skip(config))]
pub fn build_state(config: &ServiceConfig) -> WikicomicResult<AppState> {
    let story: Arc<dyn StoryDriver> = Arc::new(GroqClient::with_api_key(
        require_env("GROQ_API_KEY")?,
        config.providers.groq.model.clone(),
    )?);
    let image: Arc<dyn ImageDriver> = Arc::new(GeminiImageClient::with_api_key(
        require_env("GEMINI_API_KEY")?,
        config.providers.gemini.model.clone(),
    )?);
    let articles: Arc<dyn ArticleSource> = Arc::new(WikipediaClient::new()?);

    let store = PanelStore::new(&config.server.media_root)?;
    let repository: Arc<dyn ComicRepository> = Arc::new(InMemoryComicRepository::new());
    let status: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());

    let pipeline = Arc::new(ComicPipeline::new(
        Arc::clone(&articles),
        StorylineWriter::new(story),
        PanelRenderer::new(image, store),
        repository,
        status,
    ));
    let runner = Arc::new(TaskRunner::new(config.generation.max_concurrent));

    info!(
        chat_model = %config.providers.groq.model,
        image_model = %config.providers.gemini.model,
        media_root = %config.server.media_root,
        max_concurrent = config.generation.max_concurrent,
        "Application state assembled"
    );

    Ok(AppState::new(
        pipeline,
        articles,
        runner,
        config.search.limit,
    ))
}
