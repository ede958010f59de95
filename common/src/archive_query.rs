//! Query filter model shared by every paginated archive listing.

use serde::{Deserialize, Serialize};

use crate::archive_const::ARCHIVE_PAGE_SIZE;

/// Record language as the API spells it in filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiLang {
    English,
    Arabic,
}

impl ApiLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiLang::English => "english",
            ApiLang::Arabic => "arabic",
        }
    }
}

impl std::fmt::Display for ApiLang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filters for a paginated archive listing.
///
/// An empty string, empty subject list, or `None` means the field is unset:
/// it is left out of the request and does not participate in change
/// detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFilters {
    pub page: u64,
    pub per_page: u64,
    pub lang: Option<ApiLang>,
    pub query_term: String,
    pub url_filter: String,
    pub date_from: String,
    pub date_to: String,
    pub is_private: Option<bool>,
    pub metadata_subjects: Vec<u64>,
    pub metadata_subjects_inclusive_filter: Option<bool>,
    pub email: String,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self::with_page_size(ARCHIVE_PAGE_SIZE)
    }
}

impl QueryFilters {
    pub fn with_page_size(per_page: u64) -> Self {
        Self {
            page: 0,
            per_page,
            lang: None,
            query_term: String::new(),
            url_filter: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            is_private: None,
            metadata_subjects: Vec::new(),
            metadata_subjects_inclusive_filter: None,
            email: String::new(),
        }
    }

    /// Shallow-merges `update` into `self`: present fields overwrite, absent
    /// fields are left alone.
    pub fn apply(&mut self, update: FilterUpdate) {
        let FilterUpdate {
            page,
            per_page,
            lang,
            query_term,
            url_filter,
            date_from,
            date_to,
            is_private,
            metadata_subjects,
            metadata_subjects_inclusive_filter,
            email,
        } = update;
        if let Some(page) = page {
            self.page = page;
        }
        if let Some(per_page) = per_page {
            self.per_page = per_page;
        }
        if let Some(lang) = lang {
            self.lang = Some(lang);
        }
        if let Some(query_term) = query_term {
            self.query_term = query_term;
        }
        if let Some(url_filter) = url_filter {
            self.url_filter = url_filter;
        }
        if let Some(date_from) = date_from {
            self.date_from = date_from;
        }
        if let Some(date_to) = date_to {
            self.date_to = date_to;
        }
        if let Some(is_private) = is_private {
            self.is_private = Some(is_private);
        }
        if let Some(metadata_subjects) = metadata_subjects {
            self.metadata_subjects = metadata_subjects;
        }
        if let Some(inclusive) = metadata_subjects_inclusive_filter {
            self.metadata_subjects_inclusive_filter = Some(inclusive);
        }
        if let Some(email) = email {
            self.email = email;
        }
    }
}

/// A partial filter change. Every field is optional; only the fields a caller
/// sets are written into the target [`QueryFilters`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterUpdate {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub lang: Option<ApiLang>,
    pub query_term: Option<String>,
    pub url_filter: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub is_private: Option<bool>,
    pub metadata_subjects: Option<Vec<u64>>,
    pub metadata_subjects_inclusive_filter: Option<bool>,
    pub email: Option<String>,
}

impl FilterUpdate {
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    pub fn lang(lang: ApiLang) -> Self {
        Self {
            lang: Some(lang),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut filters = QueryFilters {
            lang: Some(ApiLang::English),
            query_term: "khartoum".to_string(),
            ..Default::default()
        };
        filters.apply(FilterUpdate {
            page: Some(2),
            url_filter: Some("example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(filters.page, 2);
        assert_eq!(filters.per_page, ARCHIVE_PAGE_SIZE);
        assert_eq!(filters.url_filter, "example.com");
        // untouched fields survive the merge
        assert_eq!(filters.lang, Some(ApiLang::English));
        assert_eq!(filters.query_term, "khartoum");
    }

    #[test]
    fn apply_can_clear_a_text_field_with_an_empty_string() {
        let mut filters = QueryFilters {
            query_term: "old".to_string(),
            ..Default::default()
        };
        filters.apply(FilterUpdate {
            query_term: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(filters.query_term, "");
    }

    #[test]
    fn api_lang_serializes_to_wire_values() {
        assert_eq!(
            serde_json::to_string(&ApiLang::English).unwrap(),
            "\"english\""
        );
        assert_eq!(
            serde_json::to_string(&ApiLang::Arabic).unwrap(),
            "\"arabic\""
        );
        assert_eq!(ApiLang::Arabic.to_string(), "arabic");
    }
}
