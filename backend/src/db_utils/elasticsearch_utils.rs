//! Engine transport: sends page search requests to Elasticsearch and decodes the raw answer.

use std::{future::Future, time::Duration};

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::{
    api::search::search_body::PageSearchRequest,
    config::SearchConfig,
    error::{SearchError, SearchResult},
};

#[derive(Debug, Deserialize)]
pub struct RawSearchResult {
    pub hits: RawSearchResultHits,
}

/// Group hits are kept as JSON so each one can be decoded with its position attached to errors.
#[derive(Debug, Deserialize)]
pub struct RawSearchResultHits {
    pub total: RawSearchResultTotal,
    pub hits: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawSearchResultTotal {
    pub value: u64,
}

/// Representative hit of one collapsed book.
#[derive(Debug, Deserialize)]
pub struct RawGroupHit {
    #[serde(rename = "_source")]
    pub source: RawGroupSource,
    pub inner_hits: RawInnerHits,
}

#[derive(Debug, Deserialize)]
pub struct RawGroupSource {
    pub parent_doc_id: u64,
    pub title: String,
    pub author: String,
    pub course: String,
    pub module: u32,
    pub section: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawInnerHits {
    pub matched_pages: RawInnerHitsGroup,
}

#[derive(Debug, Deserialize)]
pub struct RawInnerHitsGroup {
    pub hits: RawInnerHitsList,
}

#[derive(Debug, Deserialize)]
pub struct RawInnerHitsList {
    pub hits: Vec<RawPageHit>,
}

#[derive(Debug, Deserialize)]
pub struct RawPageHit {
    #[serde(rename = "_source")]
    pub source: RawPageSource,
    pub highlight: RawPageHighlight,
}

#[derive(Debug, Deserialize)]
pub struct RawPageSource {
    pub parent_doc_id: u64,
    pub title: String,
    pub author: String,
    pub course: String,
    pub module: u32,
    pub section: u32,
    pub page_number: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawPageHighlight {
    pub content: Vec<String>,
}

/// Connection to the index of page documents.
pub trait SearchTransport: Send + Sync {
    /// Runs one search request and returns the engine's JSON answer.
    fn search(&self, request: &PageSearchRequest) -> impl Future<Output = SearchResult<serde_json::Value>> + Send;
}

#[derive(Debug, Clone)]
pub struct ElasticsearchTransport {
    client: reqwest::Client,
    search_url: String,
}

impl ElasticsearchTransport {
    pub fn new(base_url: &str, index_name: &str, request_timeout: Duration) -> SearchResult<Self> {
        let client = reqwest::Client::builder().timeout(request_timeout).build()?;
        let search_url = format!("{}/{}/_search", base_url.trim_end_matches('/'), index_name);
        Ok(Self { client, search_url })
    }

    pub fn from_config(config: &SearchConfig) -> SearchResult<Self> {
        Self::new(&config.elasticsearch_url, &config.index_name, config.request_timeout)
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl SearchTransport for ElasticsearchTransport {
    async fn search(&self, request: &PageSearchRequest) -> SearchResult<serde_json::Value> {
        let body = serde_json::to_string(request).map_err(SearchError::RequestEncoding)?;
        let t0 = std::time::Instant::now();

        let response = self
            .client
            .post(&self.search_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("search engine error: {}: {}", status, response_txt);
            return Err(SearchError::EngineStatus { status: status.as_u16(), body: response_txt });
        }

        let dt_ms = t0.elapsed().as_millis() as u64;
        tracing::debug!(len = response_txt.len(), dt_ms, "search engine response");
        serde_json::from_str(&response_txt).map_err(SearchError::MalformedResponse)
    }
}
