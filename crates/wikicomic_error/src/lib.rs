//! Error types for the WikiComic service.
//!
//! This crate provides the foundation error types used throughout the WikiComic
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use wikicomic_error::{WikicomicResult, HttpError};
//!
//! fn fetch_data() -> WikicomicResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod model;
mod pipeline;
mod repository;
mod server;
mod storage;
mod wiki;

pub use config::ConfigError;
pub use error::{WikicomicError, WikicomicErrorKind, WikicomicResult};
pub use http::HttpError;
pub use json::JsonError;
pub use model::{ModelError, ModelErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use repository::{RepositoryError, RepositoryErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use wiki::{RetryableError, WikiError, WikiErrorKind};
