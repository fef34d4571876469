//! Error type shared by the search dispatch path.

use thiserror::Error;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Engine unreachable or the request timed out
    #[error("search engine request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Engine answered with an HTTP error status
    #[error("search engine returned {status}: {body}")]
    EngineStatus { status: u16, body: String },

    /// Engine answered with something that is not JSON
    #[error("search engine response is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("failed to encode search request: {0}")]
    RequestEncoding(#[source] serde_json::Error),

    /// Engine response lacks a field the result projection relies on
    #[error("search engine response violates the page document contract: {0}")]
    ContractViolation(String),
}

impl SearchError {
    /// True for failures of the engine call itself, as opposed to the shape of its answer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SearchError::Transport(_) | SearchError::EngineStatus { .. } | SearchError::MalformedResponse(_)
        )
    }
}
