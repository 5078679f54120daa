//! CLI command definitions.

use clap::{Args, Parser, Subcommand};

/// WikiComic - Generate comic books from Wikipedia articles
#[derive(Parser, Debug)]
#[command(name = "wikicomic")]
#[command(about = "Generate comic books from Wikipedia articles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP generation service
    Serve,

    /// Generate a comic from a Wikipedia article
    Generate(GenerateArgs),

    /// Search Wikipedia for article titles
    Search {
        /// Search query
        query: String,

        /// Maximum number of titles to return
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Wikipedia article title
    pub title: String,

    /// Visual style of the comic
    #[arg(long, default_value = "comic book")]
    pub style: String,

    /// Storyline length (short, medium, long)
    #[arg(long, default_value = "medium")]
    pub length: String,

    /// Number of scenes to generate
    #[arg(long)]
    pub scenes: Option<u32>,

    /// Audience age group (kids, teens, general, adult)
    #[arg(long, default_value = "general")]
    pub age_group: String,

    /// Depth of explanation (basic, standard, advanced)
    #[arg(long, default_value = "standard")]
    pub education_level: String,
}
