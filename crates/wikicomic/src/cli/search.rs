//! Wikipedia search command handler.

use wikicomic::{ArticleSource, ServiceConfig, WikicomicResult, WikipediaClient};

/// Handle the `search` command.
pub async fn search_articles(query: &str, limit: Option<u32>) -> WikicomicResult<()> {
    let config = ServiceConfig::load()?;
    let limit = limit.unwrap_or(config.search.limit);

    let wikipedia = WikipediaClient::new()?;
    let results = wikipedia.search(query, limit).await?;

    if results.results.is_empty() {
        println!("No articles found for '{}'", query);
    } else {
        for title in &results.results {
            println!("{}", title);
        }
    }
    if let Some(suggestion) = &results.suggestion {
        println!("Did you mean '{}'?", suggestion);
    }

    Ok(())
}
