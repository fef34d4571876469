//! Chooses between phrase and plain matching for the raw query text.

use std::sync::LazyLock;

use common::search_query::QueryMode;
use regex::Regex;

/// Whole input wrapped in single or double quotes. `.` stops at newlines.
static QUOTE_QUERY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["'](.*)["']$"#).expect("quote query regex is valid"));

/// Raw query text after mode selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedQuery {
    /// Quoted input; holds the text between the quotes.
    Phrase(String),
    /// Anything else; holds the input unchanged.
    Plain(String),
}

impl ClassifiedQuery {
    pub fn mode(&self) -> QueryMode {
        match self {
            ClassifiedQuery::Phrase(_) => QueryMode::Phrase,
            ClassifiedQuery::Plain(_) => QueryMode::Plain,
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            ClassifiedQuery::Phrase(payload) | ClassifiedQuery::Plain(payload) => payload,
        }
    }
}

/// Only quotes around the whole expression select phrase mode: `'three wisdoms'` does,
/// `word word 'quoted words'` does not.
pub fn classify(raw: &str) -> ClassifiedQuery {
    match QUOTE_QUERY_REGEX.captures(raw).and_then(|captures| captures.get(1)) {
        Some(inner) => ClassifiedQuery::Phrase(inner.as_str().to_string()),
        None => ClassifiedQuery::Plain(raw.to_string()),
    }
}
