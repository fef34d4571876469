use serde::{Deserialize, Serialize};


/// Outcome of one search: the engine's total page count and the matched books in relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultGroups {
    pub total_hits: u64,
    pub results: Vec<GroupedResult>,
}

/// One matched book with the pages that matched inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedResult {
    pub parent_doc_id: u64,
    pub title: String,
    pub author: String,
    pub course: String,
    pub module: u32,
    pub section: u32,
    pub hit_count: usize,
    pub page_hits: Vec<PageHit>,
    /// Set only when exactly one page matched, so templates need not index into `page_hits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_hit: Option<PageHit>,
}

impl GroupedResult {
    pub fn new(
        parent_doc_id: u64,
        title: String,
        author: String,
        course: String,
        module: u32,
        section: u32,
        page_hits: Vec<PageHit>,
    ) -> Self {
        Self {
            parent_doc_id,
            title,
            author,
            course,
            module,
            section,
            hit_count: page_hits.len(),
            page_hits,
            primary_hit: None,
        }
    }

    /// Copies the only page hit into `primary_hit`. Does nothing for any other hit count.
    pub fn promote_single_hit(&mut self) {
        if self.hit_count == 1 {
            self.primary_hit = self.page_hits.first().cloned();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHit {
    pub parent_doc_id: u64,
    pub title: String,
    pub author: String,
    pub course: String,
    pub module: u32,
    pub section: u32,
    pub page_number: u32,
    pub highlights: Vec<String>,
    pub highlight_count: usize,
}

impl PageHit {
    pub fn new(
        parent_doc_id: u64,
        title: String,
        author: String,
        course: String,
        module: u32,
        section: u32,
        page_number: u32,
        highlights: Vec<String>,
    ) -> Self {
        Self {
            parent_doc_id,
            title,
            author,
            course,
            module,
            section,
            page_number,
            highlight_count: highlights.len(),
            highlights,
        }
    }

    /// Relative URL of the page viewer for this hit.
    pub fn url(&self) -> String {
        format!("/{}/{}/", self.parent_doc_id, self.page_number)
    }
}
