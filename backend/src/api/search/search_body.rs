//! Typed request body for the page search.

use common::search_const::{
    COLLAPSE_FIELD, HIGHLIGHT_FRAGMENT_SIZE, INNER_HITS_NAME, INNER_HITS_SIZE, SOURCE_FIELDS,
};
use common::search_query::QueryMode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSearchRequest {
    #[serde(rename = "_source")]
    pub source: &'static [&'static str],
    pub query: ContentMatch,
    pub collapse: Collapse,
}

/// Match clause against the `content` field; the variant name is the engine query type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContentMatch {
    #[serde(rename = "match")]
    Match { content: MatchText },
    #[serde(rename = "match_phrase")]
    MatchPhrase { content: MatchText },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchText {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collapse {
    pub field: &'static str,
    pub inner_hits: InnerHits,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InnerHits {
    pub name: &'static str,
    pub size: u32,
    #[serde(rename = "_source")]
    pub source: &'static [&'static str],
    pub highlight: Highlight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub fields: HighlightFields,
    pub fragment_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightFields {
    pub content: HighlighterType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlighterType {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ContentMatch {
    pub fn new(mode: QueryMode, payload: &str) -> Self {
        let content = MatchText { query: payload.to_string() };
        match mode {
            QueryMode::Phrase => ContentMatch::MatchPhrase { content },
            QueryMode::Plain => ContentMatch::Match { content },
        }
    }
}

/// Builds the search for `payload`, collapsed per book with up to five highlighted pages each.
///
/// The payload is used verbatim in both modes.
pub fn build_page_search(mode: QueryMode, payload: &str) -> PageSearchRequest {
    PageSearchRequest {
        source: &SOURCE_FIELDS,
        query: ContentMatch::new(mode, payload),
        collapse: Collapse {
            field: COLLAPSE_FIELD,
            inner_hits: InnerHits {
                name: INNER_HITS_NAME,
                size: INNER_HITS_SIZE,
                source: &SOURCE_FIELDS,
                highlight: Highlight {
                    fields: HighlightFields { content: HighlighterType { kind: "plain" } },
                    fragment_size: HIGHLIGHT_FRAGMENT_SIZE,
                },
            },
        },
    }
}
