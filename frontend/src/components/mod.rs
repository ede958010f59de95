pub mod accession_cards;
pub mod archive_filters;
pub mod error_boundary;
pub mod lang_link;
pub mod loading;
pub mod navbar;
pub mod pagination_controls;
pub mod subjects_autocomplete;
