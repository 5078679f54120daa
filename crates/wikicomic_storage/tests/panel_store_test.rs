//! Tests for the panel image store.

use tempfile::TempDir;
use wikicomic_storage::{PanelStore, SCENES_DIR};

#[tokio::test]
async fn test_save_and_read_back() {
    let temp_dir = TempDir::new().unwrap();
    let store = PanelStore::new(temp_dir.path()).unwrap();

    let data = b"png bytes";
    let relative = store.save_panel("Ada Lovelace", 1, data).await.unwrap();

    assert_eq!(relative, "comic_scenes/Ada Lovelace/scene_1.png");

    let absolute = store.absolute_path(&relative);
    assert!(absolute.starts_with(temp_dir.path()));
    let read_back = tokio::fs::read(&absolute).await.unwrap();
    assert_eq!(read_back, data);
}

#[tokio::test]
async fn test_title_is_sanitized_in_path() {
    let temp_dir = TempDir::new().unwrap();
    let store = PanelStore::new(temp_dir.path()).unwrap();

    let relative = store.save_panel("AC/DC (band)", 2, b"x").await.unwrap();

    assert_eq!(relative, "comic_scenes/ACDC band/scene_2.png");
    assert!(store.absolute_path(&relative).exists());
}

#[tokio::test]
async fn test_unsanitizable_title_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = PanelStore::new(temp_dir.path()).unwrap();

    let result = store.save_panel("!!!", 1, b"x").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_scenes_share_a_directory_per_title() {
    let temp_dir = TempDir::new().unwrap();
    let store = PanelStore::new(temp_dir.path()).unwrap();

    store.save_panel("Mercury", 1, b"one").await.unwrap();
    store.save_panel("Mercury", 2, b"two").await.unwrap();

    let scene_dir = temp_dir.path().join(SCENES_DIR).join("Mercury");
    let mut names: Vec<_> = std::fs::read_dir(&scene_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();

    assert_eq!(names, vec!["scene_1.png", "scene_2.png"]);
}

#[tokio::test]
async fn test_rewrite_overwrites_existing_panel() {
    let temp_dir = TempDir::new().unwrap();
    let store = PanelStore::new(temp_dir.path()).unwrap();

    let relative = store.save_panel("Mercury", 1, b"first").await.unwrap();
    store.save_panel("Mercury", 1, b"second").await.unwrap();

    let read_back = tokio::fs::read(store.absolute_path(&relative)).await.unwrap();
    assert_eq!(read_back, b"second");
}

#[tokio::test]
async fn test_no_temp_files_left_behind() {
    let temp_dir = TempDir::new().unwrap();
    let store = PanelStore::new(temp_dir.path()).unwrap();

    store.save_panel("Mercury", 3, b"bytes").await.unwrap();

    let scene_dir = temp_dir.path().join(SCENES_DIR).join("Mercury");
    let leftovers: Vec<_> = std::fs::read_dir(&scene_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.ends_with(".tmp"))
        .collect();

    assert!(leftovers.is_empty());
}
