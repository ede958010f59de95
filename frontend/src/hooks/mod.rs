pub mod use_accessions;
pub mod use_collections;
pub mod use_debounced;
pub mod use_paged_resource;
pub mod use_users;
