//! Search engine access and fragment cleanup.

pub mod clean_highlight;
pub mod elasticsearch_utils;
