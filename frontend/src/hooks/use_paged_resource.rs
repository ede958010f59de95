//! Shared driver wiring a [`FilterSync`] state machine into signals.

use client::filter_sync::{FilterSync, PaginationState};
use common::archive_query::{FilterUpdate, QueryFilters};
use common::archive_records::ResourcePage;
use dioxus::prelude::*;

/// Signal projections of one paginated, filterable resource.
pub struct PagedResourceHandle<T: 'static> {
    pub filters: ReadSignal<QueryFilters>,
    pub items: ReadSignal<Option<Vec<T>>>,
    pub is_loading: ReadSignal<bool>,
    pub has_failed: ReadSignal<bool>,
    pub pagination: ReadSignal<PaginationState>,
    pub update_filters: Callback<FilterUpdate>,
    /// Re-fetches the current page even though the filters are unchanged;
    /// call after a mutation.
    pub refresh: Callback<()>,
}

impl<T> Clone for PagedResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagedResourceHandle<T> {}

/// Owns a [`FilterSync`] in a signal and runs its tickets through `fetch`.
///
/// `update_filters` only mutates state; every mutation path funnels into the
/// single reconcile step, which compares fingerprints to decide whether a
/// fetch ticket is issued. Responses come back tagged with their ticket's
/// sequence number, so a stale response cannot overwrite a newer one.
pub fn use_paged_resource<T, F, Fut>(
    per_page: u64,
    base: ReadSignal<FilterUpdate>,
    enabled: ReadSignal<bool>,
    fetch: F,
) -> PagedResourceHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(QueryFilters) -> Fut + 'static,
    Fut: Future<Output = anyhow::Result<ResourcePage<T>>> + 'static,
{
    let mut state = use_signal(move || {
        let mut sync = FilterSync::<T>::new(per_page, base.peek().clone());
        sync.set_enabled(*enabled.peek());
        sync
    });

    let fetch = use_hook(|| std::rc::Rc::new(fetch));
    let reconcile = use_callback(move |_: ()| {
        let ticket = state.write().reconcile();
        let Some(ticket) = ticket else {
            return;
        };
        let seq = ticket.seq;
        let in_flight = (*fetch)(ticket.filters);
        spawn(async move {
            match in_flight.await {
                Ok(page) => {
                    state.write().complete(seq, page);
                }
                Err(err) => {
                    dioxus::logger::tracing::error!("fetch failed: {err:#}");
                    state.write().fail(seq);
                }
            }
        });
    });

    // base filters are re-applied when the caller's base changes (e.g. the
    // parent collection finished loading); on mount this re-applies the seed
    // and triggers the initial fetch
    use_effect(move || {
        let base = base.read().clone();
        state.write().update_filters(base);
        reconcile(());
    });

    use_effect(move || {
        let enabled = *enabled.read();
        state.write().set_enabled(enabled);
        reconcile(());
    });

    let update_filters = use_callback(move |update: FilterUpdate| {
        state.write().update_filters(update);
        reconcile(());
    });

    let refresh = use_callback(move |_: ()| {
        state.write().force_refresh();
        reconcile(());
    });

    let filters = use_memo(move || state.read().filters().clone());
    let items = use_memo(move || state.read().items().map(<[T]>::to_vec));
    let is_loading = use_memo(move || state.read().is_loading());
    let has_failed = use_memo(move || state.read().has_failed());
    let pagination = use_memo(move || state.read().pagination());

    PagedResourceHandle {
        filters: filters.into(),
        items: items.into(),
        is_loading: is_loading.into(),
        has_failed: has_failed.into(),
        pagination: pagination.into(),
        update_filters,
        refresh,
    }
}
