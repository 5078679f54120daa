//! HTTP server for the WikiComic service.
//!
//! Exposes the generation API under `/api`, a health probe at `/health`,
//! and rendered panels as static files under `/media`. Generation requests
//! return immediately with a request identifier; clients poll the status
//! endpoint while the run executes on the bounded task runner.
//!
//! Configuration is layered TOML (bundled defaults, user overrides,
//! environment variables); provider API keys come from `GROQ_API_KEY` and
//! `GEMINI_API_KEY`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod request;
mod response;
mod routes;
mod server;
mod state;

pub use config::{
    GenerationSection, ProviderSection, ProvidersSection, SearchSection, ServerSection,
    ServiceConfig,
};
pub use error::{ApiError, ApiResult};
pub use request::{GenerateRequest, SearchRequest};
pub use response::{
    ComicBody, ComicSummary, GenerateAccepted, MEDIA_URL, OptionsBody, SceneBody, SceneCountRange,
};
pub use routes::create_router;
pub use server::serve;
pub use state::{AppState, build_state};
