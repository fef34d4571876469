//! Reshapes the raw engine answer into grouped, template ready results.

use common::search_result::{GroupedResult, PageHit, SearchResultGroups};

use crate::{
    db_utils::{
        clean_highlight::clean_highlight,
        elasticsearch_utils::{RawGroupHit, RawPageHit, RawSearchResult},
    },
    error::{SearchError, SearchResult},
};

/// Groups and pages keep the engine's relevance order. Any missing field fails the whole projection.
pub fn project_results(raw: serde_json::Value) -> SearchResult<SearchResultGroups> {
    let response: RawSearchResult = serde_json::from_value(raw)
        .map_err(|e| SearchError::ContractViolation(format!("hits: {e}")))?;
    let total_hits = response.hits.total.value;

    let mut results = response
        .hits
        .hits
        .into_iter()
        .enumerate()
        .map(|(group_index, hit)| {
            let hit: RawGroupHit = serde_json::from_value(hit)
                .map_err(|e| SearchError::ContractViolation(format!("hits.hits[{group_index}]: {e}")))?;
            Ok(project_group(hit))
        })
        .collect::<SearchResult<Vec<_>>>()?;

    for result in results.iter_mut() {
        result.promote_single_hit();
    }

    Ok(SearchResultGroups { total_hits, results })
}

fn project_group(hit: RawGroupHit) -> GroupedResult {
    let page_hits = hit
        .inner_hits
        .matched_pages
        .hits
        .hits
        .into_iter()
        .map(project_page)
        .collect::<Vec<_>>();

    let source = hit.source;
    GroupedResult::new(
        source.parent_doc_id,
        source.title,
        source.author,
        source.course,
        source.module,
        source.section,
        page_hits,
    )
}

fn project_page(hit: RawPageHit) -> PageHit {
    let highlights = hit
        .highlight
        .content
        .iter()
        .map(|fragment| clean_highlight(fragment))
        .collect::<Vec<_>>();

    let source = hit.source;
    PageHit::new(
        source.parent_doc_id,
        source.title,
        source.author,
        source.course,
        source.module,
        source.section,
        source.page_number,
        highlights,
    )
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page(parent_doc_id: u64, title: &str, page_number: u32, highlights: &[&str]) -> serde_json::Value {
        json!({
            "_index": "booksearch",
            "_id": format!("{parent_doc_id}-{page_number}"),
            "_score": 1.2,
            "_source": {
                "author": "Cortland Dahl",
                "title": title,
                "course": "Exploring Reality",
                "section": 1,
                "module": 1,
                "parent_doc_id": parent_doc_id,
                "page_number": page_number
            },
            "highlight": { "content": highlights }
        })
    }

    fn group(parent_doc_id: u64, title: &str, pages: Vec<serde_json::Value>) -> serde_json::Value {
        let page_count = pages.len();
        json!({
            "_index": "booksearch",
            "_score": 2.5,
            "_source": {
                "author": "Cortland Dahl",
                "title": title,
                "course": "Exploring Reality",
                "section": 1,
                "module": 1,
                "parent_doc_id": parent_doc_id,
                "page_number": 1
            },
            "fields": { "parent_doc_id": [parent_doc_id] },
            "inner_hits": {
                "matched_pages": {
                    "hits": {
                        "total": { "value": page_count, "relation": "eq" },
                        "hits": pages
                    }
                }
            }
        })
    }

    fn response(total: u64, groups: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": { "value": total, "relation": "eq" },
                "max_score": 2.5,
                "hits": groups
            }
        })
    }

    #[test]
    fn single_hit_group_is_promoted() {
        let raw = response(1, vec![group(6, "The Three Wisdoms", vec![page(6, "The Three Wisdoms", 4, &[">the second wisdom<"])])]);
        let projected = project_results(raw).unwrap();

        let result = &projected.results[0];
        assert_eq!(result.hit_count, 1);
        assert_eq!(result.page_hits.len(), 1);
        assert_eq!(result.primary_hit.as_ref(), Some(&result.page_hits[0]));
        assert_eq!(result.page_hits[0].highlights, vec!["the second wisdom".to_string()]);
    }

    #[test]
    fn multi_hit_group_has_no_primary_hit() {
        let pages = vec![page(7, "Mind", 1, &["a"]), page(7, "Mind", 2, &["b"])];
        let projected = project_results(response(2, vec![group(7, "Mind", pages)])).unwrap();
        assert!(projected.results[0].primary_hit.is_none());
        assert_eq!(projected.results[0].hit_count, 2);
    }

    #[test]
    fn engine_order_is_kept_for_groups_and_pages() {
        let raw = response(
            9,
            vec![
                group(9, "Zen Mind", vec![page(9, "Zen Mind", 30, &["z"]), page(9, "Zen Mind", 2, &["y"]), page(9, "Zen Mind", 11, &["x"])]),
                group(3, "Awakening", vec![page(3, "Awakening", 5, &["w"])]),
            ],
        );
        let projected = project_results(raw).unwrap();

        let ids = projected.results.iter().map(|r| r.parent_doc_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![9, 3]);
        let pages = projected.results[0].page_hits.iter().map(|p| p.page_number).collect::<Vec<_>>();
        assert_eq!(pages, vec![30, 2, 11]);
    }

    #[test]
    fn counts_match_sequence_lengths() {
        let raw = response(
            4,
            vec![group(
                1,
                "Book",
                vec![page(1, "Book", 1, &[">one", "two<", ",three"]), page(1, "Book", 2, &[])],
            )],
        );
        let projected = project_results(raw).unwrap();
        let result = &projected.results[0];
        assert_eq!(result.hit_count, result.page_hits.len());
        for hit in &result.page_hits {
            assert_eq!(hit.highlight_count, hit.highlights.len());
        }
        assert_eq!(result.page_hits[0].highlights, vec!["one", "two", "three"]);
        assert_eq!(result.page_hits[1].highlight_count, 0);
    }

    #[test]
    fn total_hits_comes_from_engine_not_from_groups() {
        let projected = project_results(response(42, vec![group(1, "Book", vec![page(1, "Book", 1, &["a"])])])).unwrap();
        assert_eq!(projected.total_hits, 42);
        assert_eq!(projected.results.len(), 1);
    }

    #[test]
    fn empty_response_projects_to_no_results() {
        let projected = project_results(response(0, vec![])).unwrap();
        assert_eq!(projected, SearchResultGroups { total_hits: 0, results: vec![] });
    }

    #[test]
    fn group_metadata_is_carried() {
        let projected = project_results(response(1, vec![group(6, "The Three Wisdoms", vec![page(6, "The Three Wisdoms", 4, &["a"])])])).unwrap();
        let result = &projected.results[0];
        assert_eq!(result.parent_doc_id, 6);
        assert_eq!(result.title, "The Three Wisdoms");
        assert_eq!(result.author, "Cortland Dahl");
        assert_eq!(result.course, "Exploring Reality");
        assert_eq!((result.module, result.section), (1, 1));
        assert_eq!(result.page_hits[0].url(), "/6/4/");
    }

    #[test]
    fn missing_total_is_contract_violation() {
        let raw = json!({ "hits": { "hits": [] } });
        let err = project_results(raw).unwrap_err();
        assert!(matches!(err, SearchError::ContractViolation(_)));
        assert!(err.to_string().contains("total"));
    }

    #[test]
    fn missing_group_field_names_field_and_position() {
        let mut broken = group(2, "Book", vec![page(2, "Book", 1, &["a"])]);
        broken["_source"].as_object_mut().unwrap().remove("author");
        let raw = response(2, vec![group(1, "Book", vec![page(1, "Book", 1, &["a"])]), broken]);

        let err = project_results(raw).unwrap_err();
        let message = err.to_string();
        assert!(!err.is_transport());
        assert!(message.contains("hits.hits[1]"), "{message}");
        assert!(message.contains("author"), "{message}");
    }

    #[test]
    fn missing_highlight_is_contract_violation() {
        let mut bare_page = page(1, "Book", 1, &["a"]);
        bare_page.as_object_mut().unwrap().remove("highlight");
        let err = project_results(response(1, vec![group(1, "Book", vec![bare_page])])).unwrap_err();
        assert!(err.to_string().contains("highlight"));
    }

    #[test]
    fn missing_inner_hits_is_contract_violation() {
        let mut bare_group = group(1, "Book", vec![]);
        bare_group.as_object_mut().unwrap().remove("inner_hits");
        let err = project_results(response(1, vec![bare_group])).unwrap_err();
        assert!(err.to_string().contains("inner_hits"));
    }
}
