//! Live integration tests against the real provider APIs.
//!
//! These tests hit en.wikipedia.org, Groq, and Gemini over the network and
//! are ignored by default. The chat and image tests read their API keys
//! from the environment (or a `.env` file at the workspace root).
//!
//! Run with: cargo test --package wikicomic_models -- --ignored

use wikicomic_core::{ChatRequest, ImageRequest};
use wikicomic_interface::{ArticleLookup, ArticleSource, ImageDriver, StoryDriver};
use wikicomic_models::{GeminiImageClient, GroqClient, WikipediaClient};

#[tokio::test]
#[ignore] // Hits en.wikipedia.org
async fn test_wikipedia_fetch_known_article() -> anyhow::Result<()> {
    let client = WikipediaClient::new()?;

    let lookup = client.fetch("Albert Einstein").await?;
    let article = match lookup {
        ArticleLookup::Found(article) => article,
        ArticleLookup::Disambiguation { title, .. } => {
            anyhow::bail!("'{title}' resolved to a disambiguation page")
        }
    };

    assert_eq!(article.title, "Albert Einstein");
    assert!(article.url.contains("wikipedia.org"));
    assert!(article.content.len() > 1000, "Extract should be substantial");
    println!("Fetched {} characters", article.content.len());

    Ok(())
}

#[tokio::test]
#[ignore] // Hits en.wikipedia.org
async fn test_wikipedia_detects_disambiguation() -> anyhow::Result<()> {
    let client = WikipediaClient::new()?;

    let lookup = client.fetch("Mercury").await?;
    match lookup {
        ArticleLookup::Disambiguation { title, candidates } => {
            assert_eq!(title, "Mercury");
            assert!(!candidates.is_empty(), "Candidates should be offered");
            println!("Candidates: {candidates:?}");
        }
        ArticleLookup::Found(article) => {
            anyhow::bail!("Expected a disambiguation page, got '{}'", article.title)
        }
    }

    Ok(())
}

#[tokio::test]
#[ignore] // Hits en.wikipedia.org
async fn test_wikipedia_search_suggests_for_typos() -> anyhow::Result<()> {
    let client = WikipediaClient::new()?;

    let results = client.search("albrt einstin", 5).await?;
    println!(
        "{} results, suggestion: {:?}",
        results.results.len(),
        results.suggestion
    );
    assert!(
        !results.results.is_empty() || results.suggestion.is_some(),
        "A misspelled query should produce hits or a suggestion"
    );

    Ok(())
}

#[tokio::test]
#[ignore] // Requires GROQ_API_KEY
async fn test_groq_chat_completion() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let client = GroqClient::new()?;
    let request = ChatRequest {
        max_tokens: Some(20),
        ..ChatRequest::from_prompt("Say 'ok'")
    };

    let response = client.generate(&request).await?;
    println!("Completion from {}: {}", response.model, response.content);
    assert!(!response.content.is_empty(), "Completion should contain text");

    Ok(())
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY
async fn test_gemini_renders_an_image() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let client = GeminiImageClient::new()?;
    let request = ImageRequest::from_prompt(
        "A single comic book panel of a lighthouse on a cliff at sunset, bold ink lines",
    );

    let response = client.render(&request).await?;
    println!(
        "Rendered {} bytes, mime {:?}",
        response.data.len(),
        response.mime
    );
    assert!(!response.data.is_empty(), "Image data should be present");

    Ok(())
}
