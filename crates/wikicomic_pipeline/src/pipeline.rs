//! The comic generation state machine.
//!
//! One run moves through STARTED, IN_PROGRESS, and a terminal COMPLETED or
//! ERROR, publishing a status snapshot at every transition. There is no
//! retry across steps and no resume; a failed run leaves the comic record
//! marked `failed` with the error message.

use crate::{PanelRenderer, StorylineWriter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};
use wikicomic_core::{
    ComicOptions, ComicStatus, GenerationPhase, PROGRESS_COMPLETE, PROGRESS_CREATED,
    PROGRESS_PROMPTS, PROGRESS_STORYLINE, StatusRecord, scene_progress,
};
use wikicomic_error::{
    PipelineError, PipelineErrorKind, WikiError, WikiErrorKind, WikicomicResult,
};
use wikicomic_interface::{ArticleLookup, ArticleSource, ComicRepository, StatusStore};

/// Orchestrates one comic generation from article lookup to stored panels.
///
/// The pipeline is cheap to share; collaborators are behind `Arc` and every
/// run is independent apart from the repository and status store.
pub struct ComicPipeline {
    articles: Arc<dyn ArticleSource>,
    writer: StorylineWriter,
    renderer: PanelRenderer,
    repository: Arc<dyn ComicRepository>,
    status: Arc<dyn StatusStore>,
}

impl ComicPipeline {
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        articles: Arc<dyn ArticleSource>,
        writer: StorylineWriter,
        renderer: PanelRenderer,
        repository: Arc<dyn ComicRepository>,
        status: Arc<dyn StatusStore>,
    ) -> Self {
        Self {
            articles,
            writer,
            renderer,
            repository,
            status,
        }
    }

    /// The comic repository this pipeline writes to.
    pub fn repository(&self) -> &Arc<dyn ComicRepository> {
        &self.repository
    }

    /// The status store this pipeline publishes to.
    pub fn status(&self) -> &Arc<dyn StatusStore> {
        &self.status
    }

    /// Run one generation to completion.
    ///
    /// Publishes status snapshots under `request_id` throughout the run and
    /// returns the comic identifier on success. Any step failure marks the
    /// comic `failed` (when one was created), publishes a terminal ERROR
    /// snapshot, and returns the error.
    #[instrument(skip(self, options, cancel), fields(request_id = %request_id, title = %title))]
    pub async fn run(
        &self,
        request_id: &str,
        title: &str,
        options: ComicOptions,
        cancel: CancellationToken,
    ) -> WikicomicResult<i64> {
        self.publish(
            request_id,
            StatusRecord::new(GenerationPhase::Started, "Starting comic generation...", 0),
        )
        .await;
        info!("Starting comic generation");

        let mut comic_id = None;
        match self
            .generate(request_id, title, options, &cancel, &mut comic_id)
            .await
        {
            Ok(id) => Ok(id),
            Err(e) => {
                error!(error = %e, "Comic generation failed");
                if let Some(id) = comic_id {
                    if let Err(update_err) = self
                        .repository
                        .set_status(id, ComicStatus::Failed, Some(e.to_string()))
                        .await
                    {
                        warn!(comic_id = id, error = %update_err, "Failed to record comic failure");
                    }
                }
                self.publish(
                    request_id,
                    StatusRecord::new(GenerationPhase::Error, e.to_string(), 0),
                )
                .await;
                Err(e)
            }
        }
    }

    /// The forward pass; `comic_id` is filled in once the record exists so
    /// the caller can mark it failed.
    async fn generate(
        &self,
        request_id: &str,
        title: &str,
        options: ComicOptions,
        cancel: &CancellationToken,
        comic_id: &mut Option<i64>,
    ) -> WikicomicResult<i64> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::Validation(
                "Title is required".to_string(),
            ))
            .into());
        }
        let options = options.normalized();

        ensure_live(cancel)?;
        let article = match self.articles.fetch(trimmed).await? {
            ArticleLookup::Found(article) => article,
            ArticleLookup::Disambiguation { title, candidates } => {
                return Err(WikiError::new(WikiErrorKind::Disambiguation { title, candidates }).into());
            }
        };

        let comic = self.repository.create(&article.title, &article.url, None).await?;
        *comic_id = Some(comic.id);
        self.publish(
            request_id,
            StatusRecord::new(
                GenerationPhase::InProgress,
                "Generating storyline...",
                PROGRESS_CREATED,
            ),
        )
        .await;

        ensure_live(cancel)?;
        let storyline = self.writer.write_storyline(&article, &options).await?;
        self.repository.set_storyline(comic.id, &storyline).await?;
        self.publish(
            request_id,
            StatusRecord::new(
                GenerationPhase::InProgress,
                "Creating scene prompts...",
                PROGRESS_STORYLINE,
            ),
        )
        .await;

        ensure_live(cancel)?;
        let blocks = self
            .writer
            .write_scene_prompts(&article.title, &storyline, &options)
            .await?;
        self.publish(
            request_id,
            StatusRecord::new(
                GenerationPhase::InProgress,
                "Generating comic images...",
                PROGRESS_PROMPTS,
            ),
        )
        .await;

        let total = blocks.len() as u32;
        let mut skipped = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            let number = index as u32 + 1;
            ensure_live(cancel)?;
            self.publish(
                request_id,
                StatusRecord::new(
                    GenerationPhase::InProgress,
                    format!("Generating scene {number} of {total}..."),
                    scene_progress(number, total),
                ),
            )
            .await;

            match self.renderer.render(&article.title, number, block).await {
                Some(image_path) => {
                    self.repository
                        .add_scene(comic.id, number, block, &image_path)
                        .await?;
                    info!(scene = number, "Successfully saved scene");
                }
                None => {
                    error!(scene = number, "Failed to generate scene");
                    skipped.push(number);
                }
            }
        }
        if !skipped.is_empty() {
            warn!(scenes = ?skipped, "Comic finished with missing scenes");
        }

        self.repository
            .set_status(comic.id, ComicStatus::Completed, None)
            .await?;
        info!(comic_id = comic.id, "Comic generation completed");
        self.publish(
            request_id,
            StatusRecord::new(
                GenerationPhase::Completed,
                "Comic generation completed!",
                PROGRESS_COMPLETE,
            )
            .with_comic(comic.id),
        )
        .await;
        Ok(comic.id)
    }

    /// Status updates are advisory; a failed put never aborts the run.
    async fn publish(&self, request_id: &str, record: StatusRecord) {
        if let Err(e) = self.status.put(request_id, record).await {
            warn!(error = %e, "Failed to publish status update");
        }
    }
}

fn ensure_live(cancel: &CancellationToken) -> WikicomicResult<()> {
    if cancel.is_cancelled() {
        Err(PipelineError::new(PipelineErrorKind::Cancelled).into())
    } else {
        Ok(())
    }
}
