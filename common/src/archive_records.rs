//! Wire shapes returned by the archive resource endpoints.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePage<T> {
    pub items: Vec<T>,
    pub num_pages: u64,
    pub page: u64,
    pub per_page: u64,
}

/// An archived record: a captured source plus its descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accession {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub seed_url: String,
    pub dc_date: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// A curated set of records, defined by the subjects every member carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_public: bool,
    #[serde(default)]
    pub subject_ids: Vec<u64>,
}

/// One entry of the subject vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: u64,
    pub subject: String,
}
