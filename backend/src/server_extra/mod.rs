//! HTTP routes in front of the search entry point.

pub mod search_books;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::{api::search::BookSearch, db_utils::elasticsearch_utils::SearchTransport};

pub fn router<T: SearchTransport + 'static>(search: Arc<BookSearch<T>>) -> Router {
    Router::new()
        .route("/search", get(search_books::search_books::<T>))
        .with_state(search)
}
