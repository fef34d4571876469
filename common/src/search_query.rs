//! Shared search query models.

use std::fmt;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub query: String,
}

/// How the query text is matched against page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Exact sequence of words.
    Phrase,
    /// Any of the words, best matching field wins.
    Plain,
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Phrase => f.write_str("match_phrase"),
            QueryMode::Plain => f.write_str("match"),
        }
    }
}
