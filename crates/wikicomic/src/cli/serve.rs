//! HTTP service command handler.

use wikicomic::{ServiceConfig, WikicomicResult, build_state, serve};

/// Handle the `serve` command.
pub async fn run_server() -> WikicomicResult<()> {
    tracing::info!("Starting WikiComic service");

    let config = ServiceConfig::load()?;
    let state = build_state(&config)?;

    tracing::info!("WikiComic service starting. Press Ctrl+C to stop.");

    serve(&config, state).await
}
