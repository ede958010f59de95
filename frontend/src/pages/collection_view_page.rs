//! One collection's archive view.
//!
//! The collection's subject IDs become a locked base filter: a record
//! belongs to the collection iff it carries ALL of them, so the subject
//! filter is pinned and match-all semantics are forced. Record fetching
//! waits until the collection metadata is in.

use client::locale::UiLang;
use common::archive_query::FilterUpdate;
use dioxus::prelude::*;

use crate::components::accession_cards::AccessionsListing;
use crate::components::archive_filters::ArchiveFilters;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::loading::LoadingIndicator;
use crate::config::use_archive_api;
use crate::hooks::use_accessions::use_accessions;
use crate::i18n::tr;
use crate::locale::use_locale;
use crate::session::use_user_session;

#[component]
pub fn CollectionViewPage(id: u64, lang: String, isPrivate: bool) -> Element {
    // isPrivate rides along in links from the collections grid; record
    // visibility itself is decided by the session, not the URL
    let _ = isPrivate;
    rsx! {
        Title { "Sudan Digital Archive: Collection" }
        CollectionViewRoot { id, lang }
    }
}

#[component]
fn CollectionViewRoot(id: ReadSignal<u64>, lang: ReadSignal<String>) -> Element {
    let locale = use_locale();
    let session = use_user_session();
    let api = use_archive_api();

    let url_tag = lang.read().clone();
    let url_lang = if url_tag.is_empty() {
        Ok(locale.current())
    } else {
        UiLang::from_tag(&url_tag)
    };

    use_effect(move || {
        let tag = lang.read().clone();
        if tag.is_empty() {
            return;
        }
        if let Ok(parsed) = UiLang::from_tag(&tag) {
            if parsed != locale.peek() {
                locale.set(parsed);
            }
        }
    });

    let mut collection = use_resource(move || {
        let api = api.clone();
        let id = *id.read();
        let lang = locale.current().api_lang();
        async move { api.get_collection(id, lang).await }
    });
    // the collection reloads when its id or the interface language changes
    use_effect(move || {
        let _ = *id.read();
        let _ = locale.current();
        collection.clear();
        collection.restart();
    });

    // locked base filters appear once the collection is in; until then the
    // record fetch stays disabled
    let base = use_memo(move || match collection.read().as_ref() {
        Some(Ok(found)) => FilterUpdate {
            lang: Some(locale.peek().api_lang()),
            metadata_subjects: Some(found.subject_ids.clone()),
            metadata_subjects_inclusive_filter: Some(true),
            ..Default::default()
        },
        _ => FilterUpdate::default(),
    });
    let enabled = use_memo(move || {
        matches!(collection.read().as_ref(), Some(Ok(found)) if !found.subject_ids.is_empty())
    });
    let locked_subjects = use_memo(move || match collection.read().as_ref() {
        Some(Ok(found)) => found.subject_ids.clone(),
        _ => Vec::new(),
    });

    let handle = use_accessions(session.is_logged_in.into(), base.into(), enabled.into());
    let update_filters = handle.update_filters;

    if let Err(err) = url_lang {
        return rsx! {
            ComponentErrorDisplay { error_txt: format!("{err:#}") }
        };
    }

    let not_found = tr(locale.current(), "record_not_found");
    let loaded = collection.read();
    let found = match loaded.as_ref() {
        None => {
            return rsx! {
                div { style: "padding: 40px; text-align: center;", LoadingIndicator {} }
            };
        }
        Some(Err(_)) => {
            return rsx! {
                div { style: "padding: 40px; text-align: center;", "{not_found}" }
            };
        }
        Some(Ok(found)) => found.clone(),
    };
    drop(loaded);

    rsx! {
        div {
            class: "x-page",
            style: "display: flex; flex-direction: column; align-items: center; padding: 24px; gap: 16px;",
            div {
                style: "width: 100%; max-width: 1100px;",
                h1 { style: "text-align: center; margin-bottom: 4px;", "{found.title}" }
                p { style: "text-align: center; font-size: 18px; margin-top: 0;", "{found.description}" }

                ArchiveFilters {
                    filters: handle.filters,
                    update_filters,
                    is_logged_in: session.is_logged_in,
                    locked_subject_ids: locked_subjects,
                    show_subject_filters: true,
                }

                AccessionsListing {
                    items: handle.items,
                    has_failed: handle.has_failed,
                    pagination: handle.pagination,
                    on_page: move |page: u64| {
                        update_filters.call(FilterUpdate::page(page));
                    },
                }
            }
        }
    }
}
