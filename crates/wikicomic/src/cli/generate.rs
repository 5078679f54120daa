//! One-shot comic generation command handler.

use super::commands::GenerateArgs;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use wikicomic::{
    ComicOptions, ComicRepository, PipelineError, PipelineErrorKind, ServiceConfig,
    WikicomicResult, build_state,
};

/// Handle the `generate` command.
///
/// Runs the full pipeline in the foreground and prints where the panel
/// images landed. Unlike the HTTP API, unknown option values are an error
/// here rather than falling back to defaults.
pub async fn generate_comic(args: GenerateArgs) -> WikicomicResult<()> {
    let options = build_options(&args)?;
    let config = ServiceConfig::load()?;
    let state = build_state(&config)?;

    let request_id = Uuid::new_v4().to_string();
    tracing::info!(request_id = %request_id, title = %args.title, "Starting generation run");

    let comic_id = state
        .pipeline
        .run(&request_id, &args.title, options, CancellationToken::new())
        .await?;
    let comic = state.pipeline.repository().get(comic_id).await?;

    let media_root = Path::new(&config.server.media_root);
    println!("Comic {} generated from '{}'", comic.id, comic.title);
    println!("Source: {}", comic.source_url);
    println!("Panels:");
    for scene in &comic.scenes {
        println!(
            "  {}. {}",
            scene.number,
            media_root.join(&scene.image_path).display()
        );
    }

    Ok(())
}

/// Build pipeline options from the command-line arguments.
fn build_options(args: &GenerateArgs) -> WikicomicResult<ComicOptions> {
    let mut builder = ComicOptions::builder();
    builder
        .style(parse_option(&args.style)?)
        .length(parse_option(&args.length)?)
        .age_group(parse_option(&args.age_group)?)
        .education_level(parse_option(&args.education_level)?);
    if let Some(scenes) = args.scenes {
        builder.scene_count(scenes);
    }

    Ok(builder.build().unwrap_or_default())
}

fn parse_option<T>(value: &str) -> WikicomicResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e| PipelineError::new(PipelineErrorKind::Validation(e)).into())
}
