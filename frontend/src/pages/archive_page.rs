//! Record search across the whole archive.

use client::locale::UiLang;
use common::archive_query::FilterUpdate;
use dioxus::prelude::*;

use crate::components::accession_cards::AccessionsListing;
use crate::components::archive_filters::ArchiveFilters;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::hooks::use_accessions::use_accessions;
use crate::locale::use_locale;
use crate::session::use_user_session;

#[component]
pub fn ArchivePage(lang: String) -> Element {
    rsx! {
        Title { "Sudan Digital Archive: Search" }
        ArchivePageRoot { lang }
    }
}

#[component]
fn ArchivePageRoot(lang: ReadSignal<String>) -> Element {
    let locale = use_locale();
    let session = use_user_session();

    let url_tag = lang.read().clone();
    let url_lang = if url_tag.is_empty() {
        Ok(locale.current())
    } else {
        UiLang::from_tag(&url_tag)
    };
    let initial_lang = url_lang.as_ref().copied().unwrap_or(UiLang::En);

    let base = use_signal(move || FilterUpdate {
        lang: Some(initial_lang.api_lang()),
        query_term: Some(String::new()),
        url_filter: Some(String::new()),
        metadata_subjects: Some(Vec::new()),
        metadata_subjects_inclusive_filter: Some(true),
        is_private: Some(false),
        ..Default::default()
    });
    let enabled = use_signal(|| true);
    let handle = use_accessions(session.is_logged_in.into(), base.into(), enabled.into());
    let update_filters = handle.update_filters;

    // the URL is the source of truth for the locale: applied on mount and on
    // every URL change, never the other way around
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

    // language is itself a filter dimension; every locale change (URL or
    // toggle) lands in the filter state
    use_effect(move || {
        let api_lang = locale.current().api_lang();
        update_filters.call(FilterUpdate::lang(api_lang));
    });

    let locked = use_signal(Vec::<u64>::new);

    // unsupported tags fail loud, after every hook above ran
    if let Err(err) = url_lang {
        return rsx! {
            ComponentErrorDisplay { error_txt: format!("{err:#}") }
        };
    }

    rsx! {
        div {
            class: "x-page",
            style: "display: flex; flex-direction: column; align-items: center; padding: 24px; gap: 16px;",

            div {
                style: "width: 100%; max-width: 1100px;",
                ArchiveFilters {
                    filters: handle.filters,
                    update_filters,
                    is_logged_in: session.is_logged_in,
                    locked_subject_ids: locked,
                    show_subject_filters: true,
                }
            }

            div {
                style: "width: 100%; max-width: 1100px;",
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
