//! Search API modules.

pub mod search;
