//! Panel rendering over an image driver and the panel store.

use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use wikicomic_core::ImageRequest;
use wikicomic_interface::ImageDriver;
use wikicomic_storage::PanelStore;

/// Renders scene blocks into stored panel images.
pub struct PanelRenderer {
    driver: Arc<dyn ImageDriver>,
    store: PanelStore,
}

impl PanelRenderer {
    /// Create a renderer over the given image driver and panel store.
    pub fn new(driver: Arc<dyn ImageDriver>, store: PanelStore) -> Self {
        Self { driver, store }
    }

    /// Render one scene block and store the panel image.
    ///
    /// Returns the stored path relative to the media root, or `None` when
    /// rendering or storage failed. Failures are logged, not raised; the
    /// caller decides whether a missing panel aborts the run.
    #[instrument(skip(self, block), fields(scene = scene_number, provider = self.driver.provider_name()))]
    pub async fn render(&self, title: &str, scene_number: u32, block: &str) -> Option<String> {
        let instruction = wikicomic_script::panel_instruction(block);
        let request = ImageRequest::from_prompt(instruction);

        let image = match self.driver.render(&request).await {
            Ok(image) => image,
            Err(e) => {
                error!(error = %e, "Image generation failed");
                return None;
            }
        };
        if let Some(commentary) = &image.commentary {
            debug!(commentary = %commentary, "Model commentary alongside image");
        }

        match self.store.save_panel(title, scene_number, &image.data).await {
            Ok(path) => {
                info!(path = %path, bytes = image.data.len(), "Panel stored");
                Some(path)
            }
            Err(e) => {
                error!(error = %e, "Panel storage failed");
                None
            }
        }
    }
}
