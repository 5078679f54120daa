//! Core data types for the WikiComic generation service.
//!
//! This crate provides the foundation data types shared across the workspace:
//! chat and image request primitives for the provider drivers, the comic
//! option enumerations, and the domain records tracked by the repository
//! and status store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod chat;
mod comic;
mod image;
mod message;
mod options;
mod role;
mod status;

pub use article::Article;
pub use chat::{ChatRequest, ChatResponse};
pub use comic::{Comic, ComicStatus, Scene};
pub use image::{ImageRequest, ImageResponse};
pub use message::Message;
pub use options::{
    AgeGroup, ComicOptions, ComicOptionsBuilder, ComicStyle, EducationLevel, TargetLength,
    SCENE_COUNT_DEFAULT, SCENE_COUNT_MAX, SCENE_COUNT_MIN,
};
pub use role::Role;
pub use status::{
    scene_progress, GenerationPhase, StatusRecord, PROGRESS_COMPLETE, PROGRESS_CREATED,
    PROGRESS_PROMPTS, PROGRESS_STORYLINE,
};
