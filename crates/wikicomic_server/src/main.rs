use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wikicomic_server::{ServiceConfig, build_state, serve};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wikicomic_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServiceConfig::load()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Loaded server configuration"
    );

    let state = build_state(&config)?;
    serve(&config, state).await?;

    Ok(())
}
