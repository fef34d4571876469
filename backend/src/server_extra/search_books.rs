use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::search_query::SearchQuery;

use crate::{api::search::BookSearch, db_utils::elasticsearch_utils::SearchTransport};

/// `GET /search?query=...`: grouped results as JSON, or 502 with the error text.
pub async fn search_books<T: SearchTransport + 'static>(
    State(search): State<Arc<BookSearch<T>>>,
    Query(query): Query<SearchQuery>,
) -> Response {
    match search.search(&query.query).await {
        Ok(groups) => Json(groups).into_response(),
        Err(e) => {
            tracing::error!("search_books: request failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response()
        }
    }
}
