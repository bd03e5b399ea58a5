//! Wikipedia client
//!
//! Implements "fetch raw summary text for an entity name" against the
//! MediaWiki API: opensearch title lookup, page HTML fetch, disambiguation
//! detection, infobox isolation, text cleanup.

use serde::Deserialize;
use url::Url;

use crate::error::FactboxError;
use crate::infobox::{clean_text, first_infobox_text, is_disambiguation};

/// Identifying user agent, as the Wikimedia API etiquette asks for
const USER_AGENT: &str = concat!(
    "factbox/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/factbox/factbox-cli)"
);

/// How many titles to request from opensearch
const SEARCH_LIMIT: &str = "5";

/// One opensearch result: a resolved page title and its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}

/// The opensearch response shape: `[query, titles, descriptions, urls]`
#[derive(Debug, Deserialize)]
pub struct OpenSearchPayload(String, Vec<String>, Vec<String>, Vec<String>);

impl OpenSearchPayload {
    /// The search term as the API normalized it
    pub fn query(&self) -> &str {
        &self.0
    }

    /// One description per title (often empty strings)
    pub fn descriptions(&self) -> &[String] {
        &self.2
    }

    /// Pair titles with their page URLs, dropping any unmatched tail.
    pub fn hits(self) -> Vec<SearchHit> {
        let OpenSearchPayload(_, titles, _, urls) = self;
        titles
            .into_iter()
            .zip(urls)
            .map(|(title, url)| SearchHit { title, url })
            .collect()
    }
}

/// Client for one Wikipedia language edition
pub struct WikiClient {
    client: reqwest::Client,
    api_base: Url,
}

impl WikiClient {
    /// Create a client for the given language edition (e.g. `"en"`).
    pub fn new(lang: &str) -> Result<Self, FactboxError> {
        let api_base = Url::parse(&format!("https://{lang}.wikipedia.org/w/api.php"))?;
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, api_base })
    }

    /// Override the API origin (tests, mirrors).
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }

    /// Resolve a free-text title via the opensearch API.
    pub async fn search(&self, title: &str) -> Result<Vec<SearchHit>, FactboxError> {
        tracing::debug!(title, "opensearch lookup");

        let response = self
            .client
            .get(self.api_base.clone())
            .query(&[
                ("action", "opensearch"),
                ("format", "json"),
                ("limit", SEARCH_LIMIT),
                ("search", title),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FactboxError::PageFetch {
                status: response.status().as_u16(),
            });
        }

        let payload: OpenSearchPayload =
            response
                .json()
                .await
                .map_err(|e| FactboxError::InvalidResponse {
                    details: e.to_string(),
                })?;

        tracing::debug!(query = payload.query(), "opensearch resolved");
        let hits = payload.hits();
        tracing::debug!(count = hits.len(), "opensearch hits");
        Ok(hits)
    }

    /// Fetch the raw HTML of one page URL.
    pub async fn page_html(&self, url: &str) -> Result<String, FactboxError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FactboxError::PageFetch {
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch the cleaned summary-box text for an entity name.
    ///
    /// Pipeline: opensearch -> first hit -> page HTML -> disambiguation check
    /// -> first infobox -> cleanup. Every failure mode maps onto the
    /// [`FactboxError`] lookup family.
    pub async fn summary_text(&self, entity: &str) -> Result<String, FactboxError> {
        let hits = self.search(entity).await?;
        let hit = hits.first().ok_or_else(|| FactboxError::NoResults {
            title: entity.to_string(),
        })?;

        tracing::debug!(entity, title = %hit.title, url = %hit.url, "fetching page");
        let html = self.page_html(&hit.url).await?;

        if is_disambiguation(&html) {
            return Err(FactboxError::Disambiguation {
                title: hit.title.clone(),
            });
        }

        let text = first_infobox_text(&html)?;
        Ok(clean_text(&text))
    }
}

// ============================================================================
// TESTS
// ============================================================================
