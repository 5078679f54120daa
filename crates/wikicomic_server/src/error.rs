//! HTTP error mapping.
//!
//! Handlers return [`ApiResult`]; every error renders as JSON
//! `{"error": message}` with a status code keyed off the domain error kind.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wikicomic_error::{
    PipelineErrorKind, RepositoryErrorKind, WikiErrorKind, WikicomicError, WikicomicErrorKind,
};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`WikicomicError`] for domain errors and adds HTTP-specific
/// variants for request-shape problems the domain never sees.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ApiError {
    /// A domain error from the workspace crates.
    #[display("{}", _0)]
    #[from]
    Domain(WikicomicError),

    /// Request input failed validation.
    #[display("Bad request: {}", _0)]
    BadRequest(String),

    /// The requested resource does not exist.
    #[display("Not found: {}", _0)]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Domain(err) => classify_domain_error(err),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a domain error into an HTTP status and client-facing message.
///
/// - Missing articles and comics map to 404.
/// - Empty queries and validation failures map to 400.
/// - Disambiguation and duplicate scenes map to 409.
/// - Upstream provider and Wikipedia failures map to 502.
/// - Everything else maps to 500 with a sanitized message.
fn classify_domain_error(err: &WikicomicError) -> (StatusCode, String) {
    match err.kind() {
        WikicomicErrorKind::Wiki(wiki) => match &wiki.kind {
            WikiErrorKind::NotFound(_) => (StatusCode::NOT_FOUND, wiki.kind.to_string()),
            WikiErrorKind::EmptyQuery => (StatusCode::BAD_REQUEST, wiki.kind.to_string()),
            WikiErrorKind::Disambiguation { .. } => (StatusCode::CONFLICT, wiki.kind.to_string()),
            WikiErrorKind::Http { .. } | WikiErrorKind::Network(_) | WikiErrorKind::Response(_) => {
                (StatusCode::BAD_GATEWAY, wiki.kind.to_string())
            }
        },
        WikicomicErrorKind::Repository(repo) => match &repo.kind {
            RepositoryErrorKind::ComicNotFound(_) => {
                (StatusCode::NOT_FOUND, repo.kind.to_string())
            }
            RepositoryErrorKind::DuplicateScene { .. } => {
                (StatusCode::CONFLICT, repo.kind.to_string())
            }
        },
        WikicomicErrorKind::Pipeline(pipeline) => match &pipeline.kind {
            PipelineErrorKind::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            PipelineErrorKind::Cancelled => {
                (StatusCode::INTERNAL_SERVER_ERROR, pipeline.kind.to_string())
            }
        },
        WikicomicErrorKind::Model(model) => (StatusCode::BAD_GATEWAY, model.kind.to_string()),
        other => {
            tracing::error!(error = %other, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}
