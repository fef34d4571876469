//! Page search: query classification, request building, engine call and result projection.

pub mod query_mode;
pub use query_mode::{ClassifiedQuery, classify};

pub mod search_body;
pub use search_body::{PageSearchRequest, build_page_search};

pub mod project_results;
pub use project_results::project_results;

mod search_for_results;
pub use search_for_results::BookSearch;
