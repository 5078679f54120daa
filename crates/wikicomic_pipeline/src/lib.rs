//! Comic generation pipeline for WikiComic.
//!
//! This crate wires the article source, chat driver, image driver, panel
//! store, and repository into one state machine ([`ComicPipeline`]) and
//! provides the in-memory stores and the bounded [`TaskRunner`] the server
//! runs pipelines on.
//!
//! A run publishes status snapshots keyed by request identifier:
//!
//! ```text
//! STARTED (0) -> IN_PROGRESS (10, 30, 40, per-scene...) -> COMPLETED (100)
//!                                                       \-> ERROR (0)
//! ```
//!
//! Failed panel renders skip their scene number rather than aborting the
//! run; every other step failure is terminal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod renderer;
mod repository;
mod runner;
mod status;
mod storyline;

pub use pipeline::ComicPipeline;
pub use renderer::PanelRenderer;
pub use repository::InMemoryComicRepository;
pub use runner::{DEFAULT_MAX_CONCURRENT, TaskRunner};
pub use status::{InMemoryStatusStore, STATUS_TTL};
pub use storyline::StorylineWriter;
