//! Paginated admin user listing.
//!
//! Mutations live with the page (they need per-action notices); the page
//! calls `refresh` after a successful create/update/delete so the current
//! page reloads without an optimistic local edit.

use common::archive_const::USERS_PAGE_SIZE;
use common::archive_query::FilterUpdate;
use common::user_admin::User;
use dioxus::prelude::*;

use crate::config::use_archive_api;
use crate::hooks::use_paged_resource::{PagedResourceHandle, use_paged_resource};

pub fn use_users() -> PagedResourceHandle<User> {
    let api = use_archive_api();
    let base = use_signal(FilterUpdate::default);
    let enabled = use_signal(|| true);
    use_paged_resource(USERS_PAGE_SIZE, base.into(), enabled.into(), move |filters| {
        let api = api.clone();
        async move { api.list_users(&filters).await }
    })
}
