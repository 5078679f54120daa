//! Trait definitions for the WikiComic generation service.
//!
//! These traits are the seams between the pipeline and its collaborators:
//! the LLM and image providers, the Wikipedia lookup, and the two stores.
//! Production wires in the REST clients and in-memory stores; tests wire in
//! fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ArticleSource, ComicRepository, ImageDriver, StatusStore, StoryDriver};
pub use types::{ArticleLookup, SearchResults};
