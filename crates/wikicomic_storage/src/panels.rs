//! Panel image store under the media root.

use crate::sanitize::{sanitize_dir_component, sanitize_filename};
use std::path::{Path, PathBuf};
use wikicomic_error::{StorageError, StorageErrorKind, WikicomicResult};

/// Directory under the media root where panels are written.
pub const SCENES_DIR: &str = "comic_scenes";

/// Stores rendered panel images under a media root.
///
/// Layout: `{media_root}/comic_scenes/{sanitized-title}/scene_{n}.png`.
/// Writes go to a temp file first and are renamed into place.
pub struct PanelStore {
    media_root: PathBuf,
}

impl PanelStore {
    /// Create a store rooted at `media_root`, creating the directory if it
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(media_root))]
    pub fn new(media_root: impl Into<PathBuf>) -> WikicomicResult<Self> {
        let media_root = media_root.into();

        std::fs::create_dir_all(&media_root).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                media_root.display(),
                e
            )))
        })?;

        tracing::info!(path = %media_root.display(), "Created panel store");
        Ok(Self { media_root })
    }

    /// The media root this store writes under.
    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// Media-relative path of a scene image.
    ///
    /// # Errors
    ///
    /// Returns error when the title sanitizes to an empty directory name.
    pub fn scene_path(&self, title: &str, scene_number: u32) -> WikicomicResult<String> {
        let dir = sanitize_filename(&sanitize_dir_component(title));
        if dir.is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "title '{}' sanitizes to an empty directory name",
                title
            )))
            .into());
        }

        Ok(format!("{}/{}/scene_{}.png", SCENES_DIR, dir, scene_number))
    }

    /// Absolute filesystem path for a media-relative path.
    pub fn absolute_path(&self, relative: &str) -> PathBuf {
        self.media_root.join(relative)
    }

    /// Write panel bytes for a scene, returning the media-relative path.
    #[tracing::instrument(skip(self, data), fields(scene = scene_number, size = data.len()))]
    pub async fn save_panel(
        &self,
        title: &str,
        scene_number: u32,
        data: &[u8],
    ) -> WikicomicResult<String> {
        let relative = self.scene_path(title, scene_number)?;
        let path = self.absolute_path(&relative);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), size = data.len(), "Stored panel image");

        Ok(relative)
    }
}
