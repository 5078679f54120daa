//! Storyline and scene-prompt generation over a chat driver.

use std::sync::Arc;
use tracing::{debug, instrument};
use wikicomic_core::{Article, ComicOptions};
use wikicomic_error::WikicomicResult;
use wikicomic_interface::StoryDriver;
use wikicomic_script::{normalize_scenes, scene_prompts_request, storyline_request};

/// Turns an article into a storyline and the storyline into scene prompts.
///
/// The writer owns the prompt construction and response normalization; the
/// driver is only asked for completions. Raw storyline text is returned as
/// the model produced it, without validating the section layout.
pub struct StorylineWriter {
    driver: Arc<dyn StoryDriver>,
}

impl StorylineWriter {
    /// Create a writer over the given chat driver.
    pub fn new(driver: Arc<dyn StoryDriver>) -> Self {
        Self { driver }
    }

    /// Generate the comic storyline for an article.
    #[instrument(skip(self, article), fields(title = %article.title, provider = self.driver.provider_name()))]
    pub async fn write_storyline(
        &self,
        article: &Article,
        options: &ComicOptions,
    ) -> WikicomicResult<String> {
        let request = storyline_request(article, options);
        let response = self.driver.generate(&request).await?;
        debug!(chars = response.content.len(), "Storyline generated");
        Ok(response.content)
    }

    /// Generate exactly `scene_count` scene prompt blocks from a storyline.
    #[instrument(skip(self, storyline), fields(title = %title, provider = self.driver.provider_name()))]
    pub async fn write_scene_prompts(
        &self,
        title: &str,
        storyline: &str,
        options: &ComicOptions,
    ) -> WikicomicResult<Vec<String>> {
        let request = scene_prompts_request(title, storyline, options);
        let response = self.driver.generate(&request).await?;
        let blocks = normalize_scenes(&response.content, title, options);
        debug!(scenes = blocks.len(), "Scene prompts parsed");
        Ok(blocks)
    }
}
