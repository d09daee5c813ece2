use super::models::{BookRecord, Query};
use crate::config::Config;
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Catalog returned status {0}")]
    Status(u16),
    #[error("Failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog search response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Option<Vec<SearchDoc>>,
}

/// Individual document from the search response
#[derive(Debug, Deserialize)]
struct SearchDoc {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Option<Vec<String>>,
    #[serde(default)]
    cover_i: Option<i64>,
}

impl From<SearchDoc> for BookRecord {
    fn from(doc: SearchDoc) -> Self {
        BookRecord {
            title: doc.title.unwrap_or_default(),
            author_names: doc.author_name.unwrap_or_default(),
            cover_id: doc.cover_i,
        }
    }
}

/// Decode a `search.json` body into records, keeping the catalog's order
pub fn parse_search_response(body: &str) -> Result<Vec<BookRecord>, CatalogError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .docs
        .unwrap_or_default()
        .into_iter()
        .map(BookRecord::from)
        .collect())
}

/// Anything that can answer a catalog query (allows mocking for tests)
#[async_trait::async_trait]
pub trait CatalogSearch: Send + Sync {
    async fn search(&self, query: &Query) -> Result<Vec<BookRecord>, CatalogError>;
}

#[derive(Clone)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl OpenLibraryClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.catalog_url.clone(),
            limit: config.result_limit,
        }
    }

    /// Full request URL for a query
    pub fn search_url(&self, query: &Query) -> String {
        format!(
            "{}/search.json?{}={}&limit={}",
            self.base_url,
            query.mode().param_name(),
            urlencoding::encode(query.text()),
            self.limit
        )
    }
}

#[async_trait::async_trait]
impl CatalogSearch for OpenLibraryClient {
    async fn search(&self, query: &Query) -> Result<Vec<BookRecord>, CatalogError> {
        let url = self.search_url(query);
        debug!("Catalog request: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "bookfinder/0.1")
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog error response ({}) for {}", status, url);
            return Err(CatalogError::Status(status.as_u16()));
        }

        // Read the body first so transport and parse failures stay distinct
        let body = response.text().await?;
        let records = parse_search_response(&body)?;

        debug!("Catalog returned {} record(s)", records.len());
        Ok(records)
    }
}
