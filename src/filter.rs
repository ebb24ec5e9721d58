//! Keyword filtering over catalog summaries.

use crate::records::ThreadSummary;

/// Keeps the threads whose subject or comment excerpt contains `keyword`,
/// case-insensitively, preserving catalog order.
///
/// Matching runs against the already-truncated excerpt, so a keyword whose
/// first occurrence is past the excerpt cutoff never matches. That mirrors
/// the search behavior users of the original tool rely on, intended or not.
/// An empty keyword matches everything; rejecting it is the CLI's job.
pub fn filter_catalog(threads: Vec<ThreadSummary>, keyword: &str) -> Vec<ThreadSummary> {
    let keyword = keyword.to_lowercase();
    threads
        .into_iter()
        .filter(|t| {
            t.subject.to_lowercase().contains(&keyword)
                || t.comment.to_lowercase().contains(&keyword)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Page;
    use crate::normalize;
    use serde_json::json;

    fn threads(value: serde_json::Value) -> Vec<ThreadSummary> {
        let pages: Vec<Page> = serde_json::from_value(value).unwrap();
        normalize::catalog(pages)
    }

    #[test]
    fn matching_is_case_insensitive() {
        let fixture = json!([
            {"page": 1, "threads": [
                {"no": 1, "time": 0, "sub": "Election night"},
                {"no": 2, "time": 0, "com": "nothing to see"},
                {"no": 3, "time": 0, "com": "the ELECTION thread"},
            ]},
        ]);

        let upper = filter_catalog(threads(fixture.clone()), "Election");
        let lower = filter_catalog(threads(fixture), "election");
        assert_eq!(upper, lower);
        assert_eq!(upper.iter().map(|t| t.no).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn matches_across_pages_in_original_order() {
        let fixture = json!([
            {"page": 1, "threads": [{"no": 10, "time": 0, "sub": "Foo"}]},
            {"page": 2, "threads": [{"no": 20, "time": 0, "sub": "Bar Foo"}]},
        ]);

        let hits = filter_catalog(threads(fixture), "foo");
        assert_eq!(hits.iter().map(|t| t.no).collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn keyword_past_excerpt_cutoff_never_matches() {
        let padded = format!("{}needle", "x".repeat(normalize::EXCERPT_CHARS));
        let fixture = json!([
            {"page": 1, "threads": [{"no": 1, "time": 0, "com": padded}]},
        ]);

        assert!(filter_catalog(threads(fixture), "needle").is_empty());
    }

    #[test]
    fn empty_keyword_matches_every_thread() {
        let fixture = json!([
            {"page": 1, "threads": [
                {"no": 1, "time": 0},
                {"no": 2, "time": 0, "sub": "anything"},
            ]},
        ]);

        assert_eq!(filter_catalog(threads(fixture), "").len(), 2);
    }
}
