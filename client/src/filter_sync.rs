//! Filter-state synchronization for one paginated resource.
//!
//! [`FilterSync`] owns the canonical filter object, the fingerprint of the
//! last request it issued, and the fetched page. Mutations go through
//! [`FilterSync::update_filters`]; nothing is fetched until the single
//! explicit [`FilterSync::reconcile`] step decides the fingerprint actually
//! changed and mints a sequence-tagged ticket. Responses carry their ticket's
//! sequence back through [`FilterSync::complete`] / [`FilterSync::fail`], and
//! anything but the newest sequence is discarded, so a slow earlier response
//! can never overwrite a newer one.

use common::archive_query::{FilterUpdate, QueryFilters};
use common::archive_records::ResourcePage;

use crate::fingerprint::{Fingerprint, fingerprint};

/// Current page position. `current_page` is 0-indexed; the UI renders it
/// 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub current_page: u64,
    pub total_pages: u64,
}

/// Permission to run one fetch with a snapshot of the filters.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub filters: QueryFilters,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSync<T> {
    filters: QueryFilters,
    last_fetched: Fingerprint,
    latest_seq: u64,
    enabled: bool,
    is_loading: bool,
    has_failed: bool,
    items: Option<Vec<T>>,
    pagination: PaginationState,
}

impl<T> FilterSync<T> {
    /// Seeds the filter state with defaults for the given page size, then
    /// merges the caller's base filters on top.
    pub fn new(per_page: u64, base: FilterUpdate) -> Self {
        let mut filters = QueryFilters::with_page_size(per_page);
        filters.apply(base);
        Self {
            filters,
            last_fetched: Fingerprint::empty(),
            latest_seq: 0,
            enabled: true,
            is_loading: false,
            has_failed: false,
            items: None,
            pagination: PaginationState::default(),
        }
    }

    pub fn filters(&self) -> &QueryFilters {
        &self.filters
    }

    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True after the newest fetch failed, until the next fetch is issued.
    pub fn has_failed(&self) -> bool {
        self.has_failed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Merges a partial update into the filters. Does not fetch; call
    /// [`FilterSync::reconcile`] afterwards.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
    }

    /// While disabled, `reconcile` never issues a ticket. Used to hold
    /// fetching back until a prerequisite (e.g. the parent collection's
    /// metadata) has loaded.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Forgets the last-fetched fingerprint so the next reconcile re-fetches
    /// even if the filters are unchanged. Used after a mutation to reload the
    /// current page.
    pub fn force_refresh(&mut self) {
        self.last_fetched = Fingerprint::empty();
    }

    /// The one place a fetch decision is made: if the canonical fingerprint
    /// of the current filters differs from the last fetched one, marks the
    /// state loading, clears the displayed items, and returns a ticket for
    /// the caller to execute. Returns `None` when nothing changed.
    pub fn reconcile(&mut self) -> Option<FetchTicket> {
        if !self.enabled {
            return None;
        }
        let current = fingerprint(&self.filters);
        if current == self.last_fetched {
            return None;
        }
        self.last_fetched = current;
        self.latest_seq += 1;
        self.is_loading = true;
        self.has_failed = false;
        self.items = None;
        Some(FetchTicket {
            seq: self.latest_seq,
            filters: self.filters.clone(),
        })
    }

    /// Stores a fetched page. Returns `false` (and changes nothing) when the
    /// ticket is stale, i.e. a newer reconcile already ran.
    pub fn complete(&mut self, seq: u64, page: ResourcePage<T>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.pagination = PaginationState {
            current_page: page.page,
            total_pages: page.num_pages,
        };
        self.items = Some(page.items);
        self.is_loading = false;
        true
    }

    /// Records a failed fetch: clears the loading flag, keeps the (already
    /// cleared) items empty. Stale failures are ignored like stale results.
    pub fn fail(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.is_loading = false;
        self.has_failed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::archive_const::ARCHIVE_PAGE_SIZE;
    use common::archive_query::ApiLang;

    fn page_of(items: Vec<&str>, page: u64, num_pages: u64) -> ResourcePage<String> {
        ResourcePage {
            items: items.into_iter().map(String::from).collect(),
            num_pages,
            page,
            per_page: ARCHIVE_PAGE_SIZE,
        }
    }

    fn english_base() -> FilterUpdate {
        FilterUpdate::lang(ApiLang::English)
    }

    #[test]
    fn first_reconcile_fetches_with_the_seeded_filters() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let ticket = sync.reconcile().expect("initial fetch");
        assert_eq!(ticket.filters.page, 0);
        assert_eq!(ticket.filters.per_page, ARCHIVE_PAGE_SIZE);
        assert_eq!(ticket.filters.lang, Some(ApiLang::English));
        assert!(sync.is_loading());
    }

    #[test]
    fn clearing_an_already_unset_field_does_not_refetch() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let ticket = sync.reconcile().unwrap();
        sync.complete(ticket.seq, page_of(vec!["a"], 0, 1));

        sync.update_filters(FilterUpdate {
            query_term: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(sync.reconcile(), None);
        assert!(!sync.is_loading());
    }

    #[test]
    fn page_change_fetches_exactly_once_with_the_new_page() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let ticket = sync.reconcile().unwrap();
        sync.complete(ticket.seq, page_of(vec!["a"], 0, 3));

        sync.update_filters(FilterUpdate::page(1));
        let ticket = sync.reconcile().expect("page change fetches");
        assert_eq!(ticket.filters.page, 1);
        // no second fetch until something changes again
        assert_eq!(sync.reconcile(), None);
    }

    #[test]
    fn pagination_follows_the_fetched_page() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let ticket = sync.reconcile().unwrap();
        assert!(sync.complete(ticket.seq, page_of(vec!["a", "b"], 0, 3)));
        assert_eq!(
            sync.pagination(),
            PaginationState {
                current_page: 0,
                total_pages: 3
            }
        );
        assert_eq!(sync.items().map(<[String]>::len), Some(2));

        sync.update_filters(FilterUpdate::page(1));
        let ticket = sync.reconcile().unwrap();
        assert!(sync.items().is_none(), "items clear while a fetch is in flight");
        assert!(sync.complete(ticket.seq, page_of(vec!["c"], 1, 3)));
        assert_eq!(sync.pagination().current_page, 1);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let first = sync.reconcile().unwrap();
        sync.update_filters(FilterUpdate::page(2));
        let second = sync.reconcile().unwrap();

        // the newer fetch lands first
        assert!(sync.complete(second.seq, page_of(vec!["new"], 2, 5)));
        // the older response arrives late and must not overwrite anything
        assert!(!sync.complete(first.seq, page_of(vec!["old"], 0, 5)));
        assert_eq!(sync.items(), Some(&["new".to_string()][..]));
        assert_eq!(sync.pagination().current_page, 2);
        assert!(!sync.fail(first.seq));
    }

    #[test]
    fn failure_clears_loading_and_leaves_items_empty() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let ticket = sync.reconcile().unwrap();
        assert!(sync.fail(ticket.seq));
        assert!(!sync.is_loading());
        assert!(sync.items().is_none());
        assert!(sync.has_failed());

        // the next fetch attempt clears the failure marker
        sync.update_filters(FilterUpdate::page(1));
        let ticket = sync.reconcile().unwrap();
        assert!(!sync.has_failed());
        sync.complete(ticket.seq, page_of(vec!["a"], 1, 2));
        assert!(!sync.has_failed());
    }

    #[test]
    fn force_refresh_refetches_unchanged_filters() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        let ticket = sync.reconcile().unwrap();
        sync.complete(ticket.seq, page_of(vec!["a"], 0, 1));
        assert_eq!(sync.reconcile(), None);

        sync.force_refresh();
        let ticket = sync.reconcile().expect("refresh forces a fetch");
        assert_eq!(ticket.filters.page, 0);
    }

    #[test]
    fn disabled_state_suppresses_fetching_until_enabled() {
        let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());
        sync.set_enabled(false);
        assert_eq!(sync.reconcile(), None);
        sync.update_filters(FilterUpdate::page(4));
        assert_eq!(sync.reconcile(), None);

        sync.set_enabled(true);
        let ticket = sync.reconcile().expect("enabling releases the fetch");
        assert_eq!(ticket.filters.page, 4);
    }

    #[test]
    fn end_to_end_scenario_with_a_mock_resource() {
        // async mock fetcher standing in for the HTTP client
        async fn mock_fetch(filters: QueryFilters) -> ResourcePage<String> {
            let items = if filters.page == 0 {
                vec!["first".to_string(), "second".to_string()]
            } else {
                vec!["third".to_string()]
            };
            ResourcePage {
                items,
                num_pages: 3,
                page: filters.page,
                per_page: filters.per_page,
            }
        }

        futures::executor::block_on(async {
            let mut sync = FilterSync::<String>::new(ARCHIVE_PAGE_SIZE, english_base());

            let ticket = sync.reconcile().unwrap();
            let page = mock_fetch(ticket.filters).await;
            sync.complete(ticket.seq, page);
            assert_eq!(
                sync.pagination(),
                PaginationState {
                    current_page: 0,
                    total_pages: 3
                }
            );
            assert_eq!(sync.items().map(<[String]>::len), Some(2));

            sync.update_filters(FilterUpdate::page(1));
            let ticket = sync.reconcile().unwrap();
            assert_eq!(ticket.filters.page, 1, "request carries page=1");
            let page = mock_fetch(ticket.filters).await;
            sync.complete(ticket.seq, page);
            assert_eq!(sync.pagination().current_page, 1);
            assert_eq!(sync.items(), Some(&["third".to_string()][..]));
        });
    }
}
