//! Paginated collection listing.

use client::api::collections_access;
use common::archive_const::ARCHIVE_PAGE_SIZE;
use common::archive_query::FilterUpdate;
use common::archive_records::Collection;
use dioxus::prelude::*;

use crate::config::use_archive_api;
use crate::hooks::use_paged_resource::{PagedResourceHandle, use_paged_resource};

/// Collections use the private endpoint only when the caller is logged in
/// AND the `is_private` filter is set, unlike accessions.
pub fn use_collections(
    is_logged_in: ReadSignal<bool>,
    base_filters: ReadSignal<FilterUpdate>,
) -> PagedResourceHandle<Collection> {
    let api = use_archive_api();
    let enabled = use_signal(|| true);
    use_paged_resource(
        ARCHIVE_PAGE_SIZE,
        base_filters,
        enabled.into(),
        move |filters| {
            let api = api.clone();
            let access =
                collections_access(*is_logged_in.peek(), filters.is_private.unwrap_or(false));
            async move { api.list_collections(&filters, access).await }
        },
    )
}
