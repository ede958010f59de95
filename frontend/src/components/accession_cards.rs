//! Result cards for accession listings.

use client::filter_sync::PaginationState;
use common::archive_records::Accession;
use dioxus::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::components::pagination_controls::PaginationControls;
use crate::i18n::tr;
use crate::locale::use_locale;

/// Listing body shared by the archive and collection views: loading
/// indicator while a fetch is in flight, the no-records note for an empty or
/// failed fetch, cards plus pager otherwise.
#[component]
pub fn AccessionsListing(
    items: ReadSignal<Option<Vec<Accession>>>,
    has_failed: ReadSignal<bool>,
    pagination: ReadSignal<PaginationState>,
    on_page: Callback<u64>,
) -> Element {
    let no_records = tr(use_locale().current(), "archive_no_records_found");
    let accessions = items.read().clone();

    let accessions = match accessions {
        Some(accessions) => accessions,
        None if *has_failed.read() => Vec::new(),
        None => return rsx! { LoadingIndicator {} },
    };
    if accessions.is_empty() {
        return rsx! {
            div {
                style: "font-style: italic; text-align: center; margin-top: 12px;",
                "{no_records}"
            }
        };
    }
    rsx! {
        AccessionsCards { accessions }
        PaginationControls { pagination, on_page }
    }
}

fn title_of(accession: &Accession) -> String {
    accession
        .title
        .clone()
        .unwrap_or_else(|| accession.seed_url.clone())
}

#[component]
pub fn AccessionsCards(accessions: ReadSignal<Vec<Accession>>) -> Element {
    rsx! {
        ul {
            class: "x-accession-cards",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 20px;
                margin: 0;
                padding: 0;
                list-style: none;
                width: 100%;
            ",
            for accession in accessions.read().iter().cloned() {
                li {
                    key: "{accession.id}",
                    AccessionCard { accession }
                }
            }
        }
    }
}

#[component]
fn AccessionCard(accession: ReadSignal<Accession>) -> Element {
    let accession = accession.read().clone();
    let title = title_of(&accession);
    rsx! {
        div {
            class: "x-accession-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 12px;
                padding: 14px;
                height: 100%;
                box-shadow: 0 2px 6px 0 rgba(0,0,0,0.08);
            ",
            h3 {
                style: "margin: 0; font-size: 18px; overflow: hidden; text-overflow: ellipsis;",
                "{title}"
            }
            if let Some(description) = accession.description.clone() {
                p { style: "margin: 0; font-size: 14px;", "{description}" }
            }
            div { style: "flex-grow: 1;" }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; font-size: 13px;",
                span { "{accession.dc_date}" }
                if accession.is_private {
                    span { class: "x-private-badge", "🔒" }
                }
                span { style: "flex-grow: 1;" }
                a {
                    href: "{accession.seed_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "↗"
                }
            }
        }
    }
}
