//! Fixed parameters of the page search request.

/// Default name of the index holding one document per book page.
pub const DEFAULT_INDEX_NAME: &str = "booksearch";

/// Name under which the engine returns the collapsed pages of a book.
pub const INNER_HITS_NAME: &str = "matched_pages";

/// Maximum number of matching pages returned per book.
pub const INNER_HITS_SIZE: u32 = 5;

/// Maximum length of a highlight fragment, in characters.
pub const HIGHLIGHT_FRAGMENT_SIZE: u32 = 100;

/// Field the results are collapsed on.
pub const COLLAPSE_FIELD: &str = "parent_doc_id";

/// Full-text field that is matched and highlighted.
pub const CONTENT_FIELD: &str = "content";

/// Stored fields returned for every hit. Page text is only ever returned through highlights.
pub const SOURCE_FIELDS: [&str; 7] = [
    "author",
    "title",
    "course",
    "section",
    "module",
    "parent_doc_id",
    "page_number",
];
