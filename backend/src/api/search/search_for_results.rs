//! Search entry point: classify, build, call the engine, project.

use common::search_result::SearchResultGroups;

use crate::{
    api::search::{project_results::project_results, query_mode::classify, search_body::build_page_search},
    db_utils::elasticsearch_utils::SearchTransport,
    error::SearchResult,
};

/// Holds the engine transport for the lifetime of the process. Every call is independent.
#[derive(Debug, Clone)]
pub struct BookSearch<T> {
    transport: T,
}

impl<T: SearchTransport> BookSearch<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one search. Returns the engine's total page count and the matched books in relevance order.
    pub async fn search(&self, raw_query: &str) -> SearchResult<SearchResultGroups> {
        let classified = classify(raw_query);
        tracing::info!(
            "query: {:?} running {} search: {:?}",
            raw_query,
            classified.mode(),
            classified.payload()
        );

        let request = build_page_search(classified.mode(), classified.payload());
        let response = self.transport.search(&request).await?;
        let groups = project_results(response)?;

        tracing::debug!(total_hits = groups.total_hits, groups = groups.results.len(), "search completed");
        Ok(groups)
    }
}
