//! Serde shapes for MediaWiki action API responses.
//!
//! All queries use `formatversion=2`, which returns pages as an array and
//! flags like `missing` as booleans.

use serde::Deserialize;

/// Top-level envelope for an `action=query` response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Query payload, absent on some error responses
    pub query: Option<QueryBody>,
}

/// Body of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryBody {
    /// Pages returned by a `titles=` lookup
    #[serde(default)]
    pub pages: Vec<PageBody>,
    /// Hits returned by a `list=search` lookup
    #[serde(default)]
    pub search: Vec<SearchHit>,
    /// Search metadata, including the typo suggestion
    pub searchinfo: Option<SearchInfo>,
}

/// A single page in a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct PageBody {
    /// Canonical page title after redirect resolution
    pub title: String,
    /// True when no article exists under this title
    #[serde(default)]
    pub missing: bool,
    /// Plain-text article extract
    pub extract: Option<String>,
    /// Canonical article URL
    pub fullurl: Option<String>,
    /// Page properties; carries the disambiguation marker
    pub pageprops: Option<PageProps>,
    /// Outgoing links, populated by `prop=links`
    #[serde(default)]
    pub links: Vec<PageLink>,
}

/// Page properties block.
#[derive(Debug, Clone, Deserialize)]
pub struct PageProps {
    /// Present (as an empty string) on disambiguation pages
    pub disambiguation: Option<String>,
}

/// An outgoing link on a page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageLink {
    /// Link target title
    pub title: String,
}

/// A full-text search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// Matching article title
    pub title: String,
}

/// Search result metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchInfo {
    /// Alternate query suggested for likely typos
    pub suggestion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_lookup() {
        let body = r#"{
            "query": {
                "pages": [
                    {
                        "pageid": 18630637,
                        "title": "Ada Lovelace",
                        "extract": "Augusta Ada King, Countess of Lovelace...",
                        "fullurl": "https://en.wikipedia.org/wiki/Ada_Lovelace"
                    }
                ]
            }
        }"#;

        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        let page = &parsed.query.unwrap().pages[0];
        assert_eq!(page.title, "Ada Lovelace");
        assert!(!page.missing);
        assert!(page.extract.as_deref().unwrap().starts_with("Augusta"));
        assert!(page.pageprops.is_none());
    }

    #[test]
    fn parses_missing_page() {
        let body = r#"{
            "query": {
                "pages": [
                    { "title": "Xyzzyplugh", "missing": true }
                ]
            }
        }"#;

        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.query.unwrap().pages[0].missing);
    }

    #[test]
    fn parses_disambiguation_marker() {
        let body = r#"{
            "query": {
                "pages": [
                    {
                        "title": "Mercury",
                        "pageprops": { "disambiguation": "" },
                        "extract": "Mercury may refer to..."
                    }
                ]
            }
        }"#;

        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        let page = &parsed.query.unwrap().pages[0];
        assert!(page.pageprops.as_ref().unwrap().disambiguation.is_some());
    }

    #[test]
    fn parses_search_with_suggestion() {
        let body = r#"{
            "query": {
                "searchinfo": { "suggestion": "einstein" },
                "search": [
                    { "ns": 0, "title": "Albert Einstein" },
                    { "ns": 0, "title": "Einstein family" }
                ]
            }
        }"#;

        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        let query = parsed.query.unwrap();
        assert_eq!(query.search.len(), 2);
        assert_eq!(query.search[0].title, "Albert Einstein");
        assert_eq!(
            query.searchinfo.unwrap().suggestion.as_deref(),
            Some("einstein")
        );
    }
}
