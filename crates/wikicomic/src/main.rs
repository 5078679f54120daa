//! WikiComic CLI binary.
//!
//! This binary provides command-line access to WikiComic's functionality:
//! - Run the HTTP generation service
//! - Generate a comic from a Wikipedia article in one shot
//! - Search Wikipedia for article titles

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, generate_comic, run_server, search_articles};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load provider keys from .env before any command reads them
    dotenvy::dotenv().ok();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Serve => {
            run_server().await?;
        }

        Commands::Generate(args) => {
            generate_comic(args).await?;
        }

        Commands::Search { query, limit } => {
            search_articles(&query, limit).await?;
        }
    }

    Ok(())
}
