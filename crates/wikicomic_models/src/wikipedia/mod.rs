//! MediaWiki action API integration.

mod client;
mod dto;

pub use client::WikipediaClient;
