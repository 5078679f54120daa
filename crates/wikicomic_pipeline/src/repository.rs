//! In-memory implementation of ComicRepository.
//!
//! This module provides a simple HashMap-based repository that stores comics
//! in memory. All data is lost on process restart; rendered panel files
//! persist on disk but are orphaned.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use wikicomic_core::{Comic, ComicStatus, Scene};
use wikicomic_error::{RepositoryError, RepositoryErrorKind, WikicomicResult};
use wikicomic_interface::ComicRepository;

/// In-memory repository for comic records.
///
/// Stores comics in a HashMap protected by an RwLock for thread-safe access.
/// Identifiers are monotonically increasing and never reused within the
/// process lifetime.
///
/// # Example
/// ```no_run
/// use wikicomic_pipeline::InMemoryComicRepository;
/// use wikicomic_interface::ComicRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = InMemoryComicRepository::new();
///     // Use repo.create(), get(), add_scene(), etc.
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryComicRepository {
    /// Storage for comics, keyed by ID
    comics: Arc<RwLock<HashMap<i64, Comic>>>,
    /// Next ID to assign
    next_id: Arc<RwLock<i64>>,
}

impl InMemoryComicRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            comics: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Get the number of stored comics (for testing).
    pub async fn len(&self) -> usize {
        self.comics.read().await.len()
    }

    /// Check if the repository is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.comics.read().await.is_empty()
    }
}

#[async_trait]
impl ComicRepository for InMemoryComicRepository {
    async fn create(
        &self,
        title: &str,
        source_url: &str,
        storyline: Option<&str>,
    ) -> WikicomicResult<Comic> {
        let mut next_id_guard = self.next_id.write().await;
        let id = *next_id_guard;
        *next_id_guard += 1;
        drop(next_id_guard);

        let now = Utc::now();
        let comic = Comic {
            id,
            title: title.to_string(),
            source_url: source_url.to_string(),
            storyline: storyline.map(str::to_string),
            status: ComicStatus::Pending,
            error: None,
            created_at: now,
            updated_at: now,
            scenes: Vec::new(),
        };

        self.comics.write().await.insert(id, comic.clone());
        Ok(comic)
    }

    async fn set_storyline(&self, comic_id: i64, storyline: &str) -> WikicomicResult<()> {
        let mut comics = self.comics.write().await;
        let comic = comics
            .get_mut(&comic_id)
            .ok_or_else(|| RepositoryError::new(RepositoryErrorKind::ComicNotFound(comic_id)))?;
        comic.storyline = Some(storyline.to_string());
        comic.updated_at = Utc::now();
        Ok(())
    }

    async fn add_scene(
        &self,
        comic_id: i64,
        number: u32,
        prompt: &str,
        image_path: &str,
    ) -> WikicomicResult<Scene> {
        let mut comics = self.comics.write().await;
        let comic = comics
            .get_mut(&comic_id)
            .ok_or_else(|| RepositoryError::new(RepositoryErrorKind::ComicNotFound(comic_id)))?;

        if comic.scenes.iter().any(|scene| scene.number == number) {
            return Err(RepositoryError::new(RepositoryErrorKind::DuplicateScene {
                comic_id,
                scene_number: number,
            })
            .into());
        }

        let scene = Scene {
            comic_id,
            number,
            prompt: prompt.to_string(),
            image_path: image_path.to_string(),
            created_at: Utc::now(),
        };
        comic.scenes.push(scene.clone());
        comic.updated_at = Utc::now();
        Ok(scene)
    }

    async fn set_status(
        &self,
        comic_id: i64,
        status: ComicStatus,
        error: Option<String>,
    ) -> WikicomicResult<()> {
        let mut comics = self.comics.write().await;
        let comic = comics
            .get_mut(&comic_id)
            .ok_or_else(|| RepositoryError::new(RepositoryErrorKind::ComicNotFound(comic_id)))?;
        comic.status = status;
        comic.error = error;
        comic.updated_at = Utc::now();
        Ok(())
    }

    async fn get(&self, comic_id: i64) -> WikicomicResult<Comic> {
        let comics = self.comics.read().await;
        comics
            .get(&comic_id)
            .cloned()
            .ok_or_else(|| RepositoryError::new(RepositoryErrorKind::ComicNotFound(comic_id)).into())
    }

    async fn list_all(&self) -> WikicomicResult<Vec<Comic>> {
        let comics = self.comics.read().await;
        let mut all: Vec<Comic> = comics.values().cloned().collect();
        all.sort_by_key(|comic| comic.id);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikicomic_error::WikicomicErrorKind;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryComicRepository::new();
        let first = repo.create("Ada Lovelace", "https://a", None).await.unwrap();
        let second = repo.create("Charles Babbage", "https://b", None).await.unwrap();
        let third = repo.create("Analytical Engine", "https://c", None).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
        assert_eq!(first.status, ComicStatus::Pending);
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn get_returns_not_found_for_unknown_id() {
        let repo = InMemoryComicRepository::new();
        let err = repo.get(42).await.unwrap_err();
        match err.kind() {
            WikicomicErrorKind::Repository(repo_err) => {
                assert_eq!(repo_err.kind, RepositoryErrorKind::ComicNotFound(42));
            }
            other => panic!("Unexpected error kind: {other:?}"),
        }
    }

    #[tokio::test]
    async fn set_storyline_updates_record() {
        let repo = InMemoryComicRepository::new();
        let comic = repo.create("Ada Lovelace", "https://a", None).await.unwrap();
        assert!(comic.storyline.is_none());

        repo.set_storyline(comic.id, "# Ada: Comic Storyline").await.unwrap();
        let stored = repo.get(comic.id).await.unwrap();
        assert_eq!(stored.storyline.as_deref(), Some("# Ada: Comic Storyline"));
        assert!(stored.updated_at >= comic.updated_at);
    }

    #[tokio::test]
    async fn add_scene_rejects_duplicate_numbers() {
        let repo = InMemoryComicRepository::new();
        let comic = repo.create("Ada Lovelace", "https://a", None).await.unwrap();

        repo.add_scene(comic.id, 1, "Scene 1: ...", "comic_scenes/Ada/scene_1.png")
            .await
            .unwrap();
        let err = repo
            .add_scene(comic.id, 1, "Scene 1: again", "comic_scenes/Ada/scene_1.png")
            .await
            .unwrap_err();
        match err.kind() {
            WikicomicErrorKind::Repository(repo_err) => {
                assert_eq!(
                    repo_err.kind,
                    RepositoryErrorKind::DuplicateScene {
                        comic_id: comic.id,
                        scene_number: 1,
                    }
                );
            }
            other => panic!("Unexpected error kind: {other:?}"),
        }
    }

    #[tokio::test]
    async fn scene_number_gaps_are_preserved() {
        let repo = InMemoryComicRepository::new();
        let comic = repo.create("Ada Lovelace", "https://a", None).await.unwrap();

        repo.add_scene(comic.id, 1, "Scene 1", "s/1.png").await.unwrap();
        repo.add_scene(comic.id, 3, "Scene 3", "s/3.png").await.unwrap();

        let stored = repo.get(comic.id).await.unwrap();
        let numbers: Vec<u32> = stored.scenes.iter().map(|scene| scene.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[tokio::test]
    async fn set_status_records_error_message() {
        let repo = InMemoryComicRepository::new();
        let comic = repo.create("Ada Lovelace", "https://a", None).await.unwrap();

        repo.set_status(comic.id, ComicStatus::Failed, Some("boom".to_string()))
            .await
            .unwrap();
        let stored = repo.get(comic.id).await.unwrap();
        assert_eq!(stored.status, ComicStatus::Failed);
        assert_eq!(stored.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_id() {
        let repo = InMemoryComicRepository::new();
        for title in ["First", "Second", "Third"] {
            repo.create(title, "https://x", None).await.unwrap();
        }
        let all = repo.list_all().await.unwrap();
        let titles: Vec<&str> = all.iter().map(|comic| comic.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }
}
