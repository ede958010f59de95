//! Canonical fingerprints for filter change detection.

use std::collections::BTreeMap;

use common::archive_query::QueryFilters;
use serde_json::{Value, json};

/// Canonical string form of a filter set. Two filter sets that differ only in
/// unset fields or in subject order produce the same fingerprint, so the sync
/// layer can skip fetches that would repeat the previous request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Sentinel that matches no real filter set; seeding the sync state with
    /// this forces the next reconcile to fetch.
    pub fn empty() -> Self {
        Fingerprint(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders `filters` with unset fields removed and `metadata_subjects`
/// sorted, as a JSON object with sorted keys. A map type with stable
/// iteration order is required here: unlike a JS object, a Rust map gives no
/// insertion-order guarantee, so keys are always sorted.
pub fn fingerprint(filters: &QueryFilters) -> Fingerprint {
    let mut map: BTreeMap<&'static str, Value> = BTreeMap::new();
    map.insert("page", json!(filters.page));
    map.insert("per_page", json!(filters.per_page));
    if let Some(lang) = filters.lang {
        map.insert("lang", json!(lang.as_str()));
    }
    if !filters.query_term.is_empty() {
        map.insert("query_term", json!(filters.query_term));
    }
    if !filters.url_filter.is_empty() {
        map.insert("url_filter", json!(filters.url_filter));
    }
    if !filters.date_from.is_empty() {
        map.insert("date_from", json!(filters.date_from));
    }
    if !filters.date_to.is_empty() {
        map.insert("date_to", json!(filters.date_to));
    }
    if let Some(is_private) = filters.is_private {
        map.insert("is_private", json!(is_private));
    }
    if !filters.metadata_subjects.is_empty() {
        let mut subjects = filters.metadata_subjects.clone();
        subjects.sort_unstable();
        map.insert("metadata_subjects", json!(subjects));
    }
    if let Some(inclusive) = filters.metadata_subjects_inclusive_filter {
        map.insert("metadata_subjects_inclusive_filter", json!(inclusive));
    }
    if !filters.email.is_empty() {
        map.insert("email", json!(filters.email));
    }
    Fingerprint(serde_json::to_string(&map).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::archive_query::ApiLang;

    #[test]
    fn unset_fields_do_not_affect_the_fingerprint() {
        let bare = QueryFilters::default();
        let with_empties = QueryFilters {
            query_term: String::new(),
            url_filter: String::new(),
            metadata_subjects: Vec::new(),
            ..Default::default()
        };
        assert_eq!(fingerprint(&bare), fingerprint(&with_empties));
    }

    #[test]
    fn subject_order_does_not_affect_the_fingerprint() {
        let a = QueryFilters {
            lang: Some(ApiLang::English),
            metadata_subjects: vec![3, 1, 2],
            ..Default::default()
        };
        let b = QueryFilters {
            lang: Some(ApiLang::English),
            metadata_subjects: vec![1, 2, 3],
            ..Default::default()
        };
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn set_fields_are_preserved() {
        let filters = QueryFilters {
            page: 1,
            per_page: 25,
            lang: Some(ApiLang::Arabic),
            query_term: "search".to_string(),
            url_filter: "example.com".to_string(),
            metadata_subjects: vec![1],
            is_private: Some(true),
            ..Default::default()
        };
        let rendered = fingerprint(&filters);
        let parsed: serde_json::Value = serde_json::from_str(rendered.as_str()).unwrap();
        assert_eq!(parsed["page"], 1);
        assert_eq!(parsed["per_page"], 25);
        assert_eq!(parsed["lang"], "arabic");
        assert_eq!(parsed["query_term"], "search");
        assert_eq!(parsed["url_filter"], "example.com");
        assert_eq!(parsed["metadata_subjects"], json!([1]));
        assert_eq!(parsed["is_private"], true);
    }

    #[test]
    fn meaningful_changes_produce_distinct_fingerprints() {
        let a = QueryFilters::default();
        let mut b = QueryFilters::default();
        b.page = 1;
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn the_empty_sentinel_matches_no_real_filter_set() {
        assert_ne!(fingerprint(&QueryFilters::default()), Fingerprint::empty());
    }
}
