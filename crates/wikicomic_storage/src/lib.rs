//! Panel image persistence for WikiComic.
//!
//! Rendered panels are stored as PNG files under a media root, laid out as
//! `comic_scenes/<sanitized-title>/scene_<n>.png`. Paths handed back to
//! callers are relative to the media root so the server can turn them into
//! static-file URLs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod panels;
mod sanitize;

pub use panels::{PanelStore, SCENES_DIR};
pub use sanitize::{sanitize_dir_component, sanitize_filename};
