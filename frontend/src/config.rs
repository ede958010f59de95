//! Application configuration and the shared API handle.

use client::api::ArchiveApi;
use dioxus::prelude::*;

pub const API_URL: &str = "https://api.sudandigitalarchive.com/sda-api/api/v1/";

#[derive(Clone)]
pub struct ApiHandle(pub ArchiveApi);

/// The one [`ArchiveApi`] instance every hook and page shares.
pub fn use_archive_api() -> ArchiveApi {
    use_context::<ApiHandle>().0
}
