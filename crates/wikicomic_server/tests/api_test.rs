//! HTTP API integration tests against in-process stub drivers.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tower::util::ServiceExt;
use wikicomic_core::{
    Article, ChatRequest, ChatResponse, ImageRequest, ImageResponse,
};
use wikicomic_error::{WikiError, WikiErrorKind, WikicomicResult};
use wikicomic_interface::{
    ArticleLookup, ArticleSource, ComicRepository, ImageDriver, SearchResults, StoryDriver,
};
use wikicomic_pipeline::{
    ComicPipeline, InMemoryComicRepository, InMemoryStatusStore, PanelRenderer, StorylineWriter,
    TaskRunner,
};
use wikicomic_server::{AppState, create_router};
use wikicomic_storage::PanelStore;

const PNG_STUB: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn einstein() -> Article {
    Article {
        title: "Albert Einstein".to_string(),
        url: "https://en.wikipedia.org/wiki/Albert_Einstein".to_string(),
        content: "Albert Einstein was a theoretical physicist. ".repeat(40),
        summary: "Albert Einstein was a theoretical physicist.".to_string(),
    }
}

fn scripted_scenes(count: u32) -> String {
    (1..=count)
        .map(|i| {
            format!(
                "Scene {i}: Moment {i}\n\
                 Visual: Einstein writes equations on a chalkboard, take {i}.\n\
                 Dialog: Einstein: \"Imagination is more important than knowledge.\"\n\
                 Style: comic book style with bold lines.\n\n"
            )
        })
        .collect()
}

struct StubArticleSource;

#[async_trait]
impl ArticleSource for StubArticleSource {
    async fn fetch(&self, _title: &str) -> WikicomicResult<ArticleLookup> {
        Ok(ArticleLookup::Found(einstein()))
    }

    async fn search(&self, query: &str, limit: u32) -> WikicomicResult<SearchResults> {
        if query.trim().is_empty() {
            return Err(WikiError::new(WikiErrorKind::EmptyQuery).into());
        }
        let mut results = vec![
            "Albert Einstein".to_string(),
            "Einstein family".to_string(),
            "Einstein field equations".to_string(),
        ];
        results.truncate(limit as usize);
        Ok(SearchResults {
            results,
            suggestion: None,
        })
    }
}

/// First call returns the storyline, later calls return the scene script.
struct StubStoryDriver {
    calls: AtomicU32,
}

impl StubStoryDriver {
    fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl StoryDriver for StubStoryDriver {
    async fn generate(&self, _req: &ChatRequest) -> WikicomicResult<ChatResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let content = if call == 0 {
            "# Albert Einstein: Comic Storyline\n\n## Overview\nA life in physics.".to_string()
        } else {
            scripted_scenes(3)
        };
        Ok(ChatResponse {
            content,
            model: "stub-chat".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-chat"
    }
}

struct StubImageDriver;

#[async_trait]
impl ImageDriver for StubImageDriver {
    async fn render(&self, _req: &ImageRequest) -> WikicomicResult<ImageResponse> {
        Ok(ImageResponse {
            mime: Some("image/png".to_string()),
            data: PNG_STUB.to_vec(),
            commentary: None,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-image"
    }
}

/// Build the full router with stub drivers behind fresh in-memory stores.
fn build_test_app() -> (Router, TempDir, Arc<InMemoryComicRepository>) {
    let media = TempDir::new().unwrap();
    let store = PanelStore::new(media.path()).unwrap();
    let repository = Arc::new(InMemoryComicRepository::new());
    let status = Arc::new(InMemoryStatusStore::new());
    let articles: Arc<dyn ArticleSource> = Arc::new(StubArticleSource);

    let pipeline = Arc::new(ComicPipeline::new(
        Arc::clone(&articles),
        StorylineWriter::new(Arc::new(StubStoryDriver::new())),
        PanelRenderer::new(Arc::new(StubImageDriver), store),
        repository.clone(),
        status,
    ));
    let state = AppState::new(pipeline, articles, Arc::new(TaskRunner::new(2)), 15);
    let app = create_router(state, media.path());

    (app, media, repository)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Poll the status endpoint until the run reaches a terminal phase.
async fn wait_for_terminal_status(app: &Router, request_id: &str) -> Value {
    for _ in 0..250 {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/status/{request_id}")))
            .await
            .unwrap();
        if response.status() == StatusCode::OK {
            let record = body_json(response).await;
            if record["status"] == "COMPLETED" || record["status"] == "ERROR" {
                return record;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Generation run never reached a terminal status");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _media, _repository) = build_test_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .oneshot(get_request("/this-route-does-not-exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_options_lists_enumerations() {
    let (app, _media, _repository) = build_test_app();

    let response = app.oneshot(get_request("/api/options")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["comic_styles"].as_array().unwrap().len(), 9);
    assert!(
        body["comic_styles"]
            .as_array()
            .unwrap()
            .contains(&json!("comic book"))
    );
    assert_eq!(body["target_lengths"], json!(["short", "medium", "long"]));
    assert_eq!(body["num_scenes_range"]["min"], 3);
    assert_eq!(body["num_scenes_range"]["max"], 15);
    assert_eq!(body["num_scenes_range"]["default"], 8);
}

#[tokio::test]
async fn test_generate_requires_title() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/generate", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Title is required");

    let response = app
        .oneshot(post_json("/api/generate", json!({"title": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_runs_to_completion_and_serves_the_comic() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/generate",
            json!({"title": "Albert Einstein", "num_scenes": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let accepted = body_json(response).await;
    let request_id = accepted["request_id"].as_str().unwrap().to_string();
    assert_eq!(accepted["message"], "Comic generation started");

    let record = wait_for_terminal_status(&app, &request_id).await;
    assert_eq!(record["status"], "COMPLETED");
    assert_eq!(record["progress"], 100);
    let comic_id = record["comic_id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/comic/{comic_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let comic = body_json(response).await;
    assert_eq!(comic["title"], "Albert Einstein");
    assert_eq!(comic["status"], "completed");
    let scenes = comic["scenes"].as_array().unwrap();
    assert_eq!(scenes.len(), 3);

    // The image URL must resolve through the static media mount.
    let image_url = scenes[0]["image_url"].as_str().unwrap();
    assert_eq!(
        image_url,
        "/media/comic_scenes/Albert%20Einstein/scene_1.png"
    );
    let response = app.oneshot(get_request(image_url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], PNG_STUB);
}

#[tokio::test]
async fn test_unknown_option_values_are_accepted() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .oneshot(post_json(
            "/api/generate",
            json!({"title": "Albert Einstein", "comic_style": "cubist"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_status_unknown_request_returns_404() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .oneshot(get_request("/api/status/not-a-known-request"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Status not found");
}

#[tokio::test]
async fn test_comic_unknown_id_returns_404() {
    let (app, _media, _repository) = build_test_app();

    let response = app.oneshot(get_request("/api/comic/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Comic 999 not found");
}

#[tokio::test]
async fn test_search_returns_titles() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .oneshot(post_json("/api/search", json!({"query": "einstein"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], "Albert Einstein");
}

#[tokio::test]
async fn test_search_rejects_blank_query() {
    let (app, _media, _repository) = build_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/search", json!({"query": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Search query must not be empty");

    let response = app
        .oneshot(post_json("/api/search", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comics_listing_reports_scene_counts() {
    let (app, _media, repository) = build_test_app();

    let comic = repository
        .create(
            "Albert Einstein",
            "https://en.wikipedia.org/wiki/Albert_Einstein",
            None,
        )
        .await
        .unwrap();
    repository
        .add_scene(comic.id, 1, "Scene 1: ...", "comic_scenes/x/scene_1.png")
        .await
        .unwrap();
    repository
        .create("Ada Lovelace", "https://en.wikipedia.org/wiki/Ada_Lovelace", None)
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/comics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let summaries = body.as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["title"], "Albert Einstein");
    assert_eq!(summaries[0]["scene_count"], 1);
    assert_eq!(summaries[0]["status"], "pending");
    assert_eq!(summaries[1]["title"], "Ada Lovelace");
    assert_eq!(summaries[1]["scene_count"], 0);
}
