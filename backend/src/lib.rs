//! Book page search: query dispatch to Elasticsearch and grouping of page hits per book.

pub mod api;
pub mod config;
pub mod db_utils;
pub mod error;
pub mod server_extra;

pub use api::search::BookSearch;
pub use db_utils::elasticsearch_utils::{ElasticsearchTransport, SearchTransport};
pub use error::{SearchError, SearchResult};
