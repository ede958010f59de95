//! Paginated, filterable accession listing.

use client::api::accessions_access;
use common::archive_const::ARCHIVE_PAGE_SIZE;
use common::archive_query::FilterUpdate;
use common::archive_records::Accession;
use dioxus::prelude::*;

use crate::config::use_archive_api;
use crate::hooks::use_paged_resource::{PagedResourceHandle, use_paged_resource};

/// Accessions route to the private endpoint whenever the caller is logged
/// in. The login state is sampled when each fetch fires, not subscribed to:
/// a login flip alone does not re-fetch until the filters change.
pub fn use_accessions(
    is_logged_in: ReadSignal<bool>,
    base_filters: ReadSignal<FilterUpdate>,
    enabled: ReadSignal<bool>,
) -> PagedResourceHandle<Accession> {
    let api = use_archive_api();
    use_paged_resource(ARCHIVE_PAGE_SIZE, base_filters, enabled, move |filters| {
        let api = api.clone();
        let access = accessions_access(*is_logged_in.peek());
        async move { api.list_accessions(&filters, access).await }
    })
}
