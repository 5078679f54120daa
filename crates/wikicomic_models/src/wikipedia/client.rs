//! Wikipedia article lookup and search using reqwest.

use crate::wikipedia::dto::QueryResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{debug, error, info, instrument, warn};
use wikicomic_core::Article;
use wikicomic_error::{RetryableError, WikiError, WikiErrorKind, WikicomicResult};
use wikicomic_interface::{ArticleLookup, ArticleSource, SearchResults};

const API_BASE: &str = "https://en.wikipedia.org/w/api.php";
const USER_AGENT: &str = "wikicomic/0.1 (https://github.com/wikicomic/wikicomic)";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Disambiguation pages are reported with at most this many candidates.
const DISAMBIGUATION_LIMIT: usize = 15;

/// Wikipedia article source backed by the MediaWiki action API.
///
/// Transient failures (timeouts, connection errors, 5xx and 429 responses)
/// are retried with jittered exponential backoff; the strategy parameters
/// come from the error itself via [`RetryableError`].
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    /// Creates a client for the English Wikipedia.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn new() -> WikicomicResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                WikiError::new(WikiErrorKind::Network(format!(
                    "failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!(base_url = %API_BASE, "Created Wikipedia client");

        Ok(Self {
            client,
            base_url: API_BASE.to_string(),
        })
    }

    fn query_url(&self, pairs: &[(&str, &str)]) -> String {
        let query = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.base_url, query)
    }

    async fn query_once(&self, url: &str) -> Result<QueryResponse, WikiError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            WikiError::new(WikiErrorKind::Network(format!("request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WikiError::new(WikiErrorKind::Http {
                status_code: status.as_u16(),
                message,
            }));
        }

        response.json::<QueryResponse>().await.map_err(|e| {
            WikiError::new(WikiErrorKind::Response(format!(
                "failed to parse response: {}",
                e
            )))
        })
    }

    /// Run a query, retrying transient failures with backoff parameters
    /// taken from the first error.
    async fn run_query(&self, pairs: &[(&str, &str)]) -> WikicomicResult<QueryResponse> {
        let url = self.query_url(pairs);

        let first = self.query_once(&url).await;
        let err = match first {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if !err.is_retryable() {
            error!(error = %err, "Permanent Wikipedia error, failing immediately");
            return Err(err.into());
        }

        let (initial_ms, max_retries, max_delay_secs) = err.retry_strategy_params();
        info!(
            error = %err,
            initial_backoff_ms = initial_ms,
            max_retries = max_retries,
            max_delay_secs = max_delay_secs,
            "Wikipedia query failed, will retry with configured strategy"
        );

        let retry_strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries);

        let response = Retry::spawn(retry_strategy, || {
            let attempt_url = url.clone();
            async move {
                match self.query_once(&attempt_url).await {
                    Ok(response) => Ok(response),
                    Err(e) => {
                        if e.is_retryable() {
                            warn!(error = %e, "Wikipedia query failed, will retry");
                            Err(RetryError::Transient {
                                err: e,
                                retry_after: None,
                            })
                        } else {
                            warn!(error = %e, "Permanent Wikipedia error, failing immediately");
                            Err(RetryError::Permanent(e))
                        }
                    }
                }
            }
        })
        .await?;

        Ok(response)
    }

    /// Resolve a title to a page, or `None` when no article exists.
    async fn lookup_page(&self, title: &str) -> WikicomicResult<Option<ArticleLookup>> {
        let response = self
            .run_query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("prop", "extracts|info|pageprops"),
                ("explaintext", "1"),
                ("inprop", "url"),
                ("titles", title),
            ])
            .await?;

        let page = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| {
                WikiError::new(WikiErrorKind::Response("query returned no pages".to_string()))
            })?;

        if page.missing {
            return Ok(None);
        }

        let is_disambiguation = page
            .pageprops
            .as_ref()
            .and_then(|props| props.disambiguation.as_ref())
            .is_some();
        if is_disambiguation {
            let candidates = self.disambiguation_candidates(&page.title).await?;
            info!(
                title = %page.title,
                candidates = candidates.len(),
                "Title resolves to a disambiguation page"
            );
            return Ok(Some(ArticleLookup::Disambiguation {
                title: page.title,
                candidates,
            }));
        }

        let content = page.extract.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(WikiError::new(WikiErrorKind::Response(format!(
                "article '{}' has an empty extract",
                page.title
            )))
            .into());
        }

        let url = page.fullurl.unwrap_or_else(|| article_url(&page.title));
        let summary = leading_paragraph(&content);

        debug!(
            title = %page.title,
            content_len = content.len(),
            "Fetched article"
        );

        Ok(Some(ArticleLookup::Found(Article {
            title: page.title,
            url,
            content,
            summary,
        })))
    }

    /// Fetch the outgoing article links of a disambiguation page.
    async fn disambiguation_candidates(&self, title: &str) -> WikicomicResult<Vec<String>> {
        let limit = DISAMBIGUATION_LIMIT.to_string();
        let response = self
            .run_query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "links"),
                ("plnamespace", "0"),
                ("pllimit", &limit),
                ("titles", title),
            ])
            .await?;

        let candidates = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .map(|page| {
                page.links
                    .into_iter()
                    .take(DISAMBIGUATION_LIMIT)
                    .map(|link| link.title)
                    .collect()
            })
            .unwrap_or_default();

        Ok(candidates)
    }

    async fn search_titles(&self, query: &str, limit: u32) -> WikicomicResult<QueryResponse> {
        let limit_value = limit.to_string();
        self.run_query(&[
            ("action", "query"),
            ("format", "json"),
            ("formatversion", "2"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", &limit_value),
        ])
        .await
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    #[instrument(skip(self))]
    async fn fetch(&self, title: &str) -> WikicomicResult<ArticleLookup> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(WikiError::new(WikiErrorKind::EmptyQuery).into());
        }

        if let Some(lookup) = self.lookup_page(trimmed).await? {
            return Ok(lookup);
        }

        // No direct match; fall back to the closest search hit the way the
        // site's own search box would.
        debug!(title = %trimmed, "No direct match, trying search fallback");
        let results = self.search(trimmed, 1).await?;
        let best = match results.results.first() {
            Some(best) => best.clone(),
            None => {
                return Err(WikiError::new(WikiErrorKind::NotFound(trimmed.to_string())).into());
            }
        };

        info!(title = %trimmed, fallback = %best, "Retrying lookup with search hit");
        match self.lookup_page(&best).await? {
            Some(lookup) => Ok(lookup),
            None => Err(WikiError::new(WikiErrorKind::NotFound(trimmed.to_string())).into()),
        }
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: u32) -> WikicomicResult<SearchResults> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(WikiError::new(WikiErrorKind::EmptyQuery).into());
        }

        let response = self.search_titles(trimmed, limit).await?;
        let body = response.query.ok_or_else(|| {
            WikiError::new(WikiErrorKind::Response("query returned no body".to_string()))
        })?;

        let results: Vec<String> = body.search.into_iter().map(|hit| hit.title).collect();
        let suggestion = body.searchinfo.and_then(|info| info.suggestion);

        if results.is_empty() {
            if let Some(suggested) = suggestion {
                debug!(
                    query = %trimmed,
                    suggestion = %suggested,
                    "No hits, retrying with suggestion"
                );
                let retry = self.search_titles(&suggested, limit).await?;
                let results = retry
                    .query
                    .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
                    .unwrap_or_default();
                return Ok(SearchResults {
                    results,
                    suggestion: Some(suggested),
                });
            }
            return Ok(SearchResults {
                results,
                suggestion: None,
            });
        }

        Ok(SearchResults {
            results,
            suggestion,
        })
    }
}

/// First non-empty paragraph of a plain-text extract.
fn leading_paragraph(content: &str) -> String {
    content
        .split("\n\n")
        .map(str::trim)
        .find(|paragraph| !paragraph.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Canonical article URL for a title, used when the API omits `fullurl`.
fn article_url(title: &str) -> String {
    format!(
        "https://en.wikipedia.org/wiki/{}",
        urlencoding::encode(&title.replace(' ', "_"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_paragraph_takes_first_block() {
        let content = "First paragraph about the topic.\n\nSecond paragraph with detail.";
        assert_eq!(leading_paragraph(content), "First paragraph about the topic.");
    }

    #[test]
    fn leading_paragraph_skips_blank_blocks() {
        let content = "\n\n  \n\nActual text.";
        assert_eq!(leading_paragraph(content), "Actual text.");
    }

    #[test]
    fn leading_paragraph_of_empty_extract_is_empty() {
        assert_eq!(leading_paragraph(""), "");
    }

    #[test]
    fn article_url_underscores_spaces() {
        assert_eq!(
            article_url("Ada Lovelace"),
            "https://en.wikipedia.org/wiki/Ada_Lovelace"
        );
    }

    #[test]
    fn article_url_escapes_reserved_characters() {
        assert_eq!(
            article_url("AT&T"),
            "https://en.wikipedia.org/wiki/AT%26T"
        );
    }

    #[test]
    fn query_url_encodes_values() {
        let client = WikipediaClient::new().unwrap();
        let url = client.query_url(&[
            ("action", "query"),
            ("prop", "extracts|info"),
            ("titles", "Ada Lovelace"),
        ]);
        assert_eq!(
            url,
            "https://en.wikipedia.org/w/api.php?action=query&prop=extracts%7Cinfo&titles=Ada%20Lovelace"
        );
    }
}
