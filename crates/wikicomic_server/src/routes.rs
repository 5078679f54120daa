//! API routes and handlers.

use crate::error::{ApiError, ApiResult};
use crate::request::{GenerateRequest, SearchRequest};
use crate::response::{ComicBody, ComicSummary, GenerateAccepted, MEDIA_URL, OptionsBody};
use crate::state::AppState;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;
use wikicomic_core::StatusRecord;
use wikicomic_interface::{ArticleSource, ComicRepository, SearchResults, StatusStore};

/// Creates the service router.
///
/// API endpoints live under `/api`, the health probe at `/health`, and
/// panel images are served as static files under the media mount.
pub fn create_router(state: AppState, media_root: impl AsRef<std::path::Path>) -> Router {
    let api = Router::new()
        .route("/generate", post(generate_comic))
        .route("/status/:request_id", get(check_status))
        .route("/comic/:comic_id", get(get_comic))
        .route("/comics", get(list_comics))
        .route("/search", post(search_articles))
        .route("/options", get(get_options));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .nest_service(MEDIA_URL, ServeDir::new(media_root.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Accept a generation request and start the run in the background.
async fn generate_comic(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<impl IntoResponse> {
    let title = request.title.as_deref().unwrap_or_default().trim().to_string();
    if title.is_empty() {
        return Err(ApiError::BadRequest("Title is required".to_string()));
    }

    let request_id = Uuid::new_v4().to_string();
    let options = request.options();
    info!(request_id = %request_id, title = %title, "Accepted generation request");

    let pipeline = Arc::clone(&state.pipeline);
    let cancel = state.runner.cancellation_token();
    let run_id = request_id.clone();
    state.runner.submit(&request_id, async move {
        // Run failures are already published to the status store.
        let _ = pipeline.run(&run_id, &title, options, cancel).await;
    });

    Ok((StatusCode::ACCEPTED, Json(GenerateAccepted::new(request_id))))
}

/// Current status of a generation request.
async fn check_status(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> ApiResult<Json<StatusRecord>> {
    let record = state
        .pipeline
        .status()
        .get(&request_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Status not found".to_string()))?;

    Ok(Json(record))
}

/// Fetch one comic with its scenes.
async fn get_comic(
    State(state): State<AppState>,
    Path(comic_id): Path<i64>,
) -> ApiResult<Json<ComicBody>> {
    let comic = state.pipeline.repository().get(comic_id).await?;

    Ok(Json(ComicBody::from_comic(&comic)))
}

/// List every comic as a summary, oldest first.
async fn list_comics(State(state): State<AppState>) -> ApiResult<Json<Vec<ComicSummary>>> {
    let comics = state.pipeline.repository().list_all().await?;
    let summaries = comics.iter().map(ComicSummary::from_comic).collect();

    Ok(Json(summaries))
}

/// Search for article titles matching a query.
async fn search_articles(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Json<SearchResults>> {
    let query = request.query.unwrap_or_default();
    let results = state.articles.search(&query, state.search_limit).await?;

    Ok(Json(results))
}

/// Enumerate the valid generation option values.
async fn get_options() -> Json<OptionsBody> {
    Json(OptionsBody::new())
}
