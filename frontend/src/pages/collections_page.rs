//! Collection browsing.

use client::locale::UiLang;
use common::archive_query::FilterUpdate;
use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::lang_link::LangLink;
use crate::components::loading::LoadingIndicator;
use crate::components::pagination_controls::PaginationControls;
use crate::hooks::use_collections::use_collections;
use crate::i18n::tr;
use crate::locale::use_locale;
use crate::routes::Route;
use crate::session::use_user_session;

#[component]
pub fn CollectionsPage(lang: String, isPrivate: bool) -> Element {
    rsx! {
        Title { "Sudan Digital Archive: Collections" }
        CollectionsPageRoot { lang, is_private: isPrivate }
    }
}

#[component]
fn CollectionsPageRoot(lang: ReadSignal<String>, is_private: ReadSignal<bool>) -> Element {
    let locale = use_locale();
    let session = use_user_session();

    let url_tag = lang.read().clone();
    let url_lang = if url_tag.is_empty() {
        Ok(locale.current())
    } else {
        UiLang::from_tag(&url_tag)
    };

    // an absent lang parameter is normalized into the URL
    use_effect(move || {
        if lang.read().is_empty() {
            navigator().replace(Route::CollectionsPage {
                lang: locale.peek().tag().to_string(),
                isPrivate: *is_private.peek(),
            });
        }
    });

    // base filters follow the URL parameters
    let base = use_memo(move || {
        let tag = lang.read().clone();
        let parsed = if tag.is_empty() {
            locale.peek()
        } else {
            UiLang::from_tag(&tag).unwrap_or(UiLang::En)
        };
        FilterUpdate {
            lang: Some(parsed.api_lang()),
            is_private: Some(*is_private.read()),
            ..Default::default()
        }
    });
    let handle = use_collections(session.is_logged_in.into(), base.into());
    let update_filters = handle.update_filters;

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

    // toggle path: the locale change lands in the filter state
    use_effect(move || {
        let api_lang = locale.current().api_lang();
        update_filters.call(FilterUpdate::lang(api_lang));
    });

    if let Err(err) = url_lang {
        return rsx! {
            ComponentErrorDisplay { error_txt: format!("{err:#}") }
        };
    }

    let ui_lang = locale.current();
    let title = tr(ui_lang, "collections_title");
    let empty = tr(ui_lang, "collections_empty");
    let view_button = tr(ui_lang, "collection_view_button");
    let private_label = tr(ui_lang, "archive_filter_private_records");
    let is_logged_in = *session.is_logged_in.read();
    let private_checked = handle.filters.read().is_private.unwrap_or(false);

    let collections = handle.items.read().clone();
    let body = match collections {
        None if !*handle.has_failed.read() => rsx! { LoadingIndicator {} },
        None => rsx! {
            div { style: "text-align: center; font-size: 20px;", "{empty}" }
        },
        Some(collections) if collections.is_empty() => rsx! {
            div { style: "text-align: center; font-size: 20px;", "{empty}" }
        },
        Some(collections) => rsx! {
            div {
                class: "x-collection-grid",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 24px;
                    margin: 20px 0;
                ",
                for collection in collections.iter().cloned() {
                    div {
                        key: "collection-card-{collection.id}",
                        class: "x-collection-card",
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 10px;
                            border: 1px solid rgba(0,0,0,0.2);
                            border-radius: 12px;
                            padding: 16px;
                            box-shadow: 0 2px 6px 0 rgba(0,0,0,0.08);
                        ",
                        h3 { style: "margin: 0;", "{collection.title}" }
                        p { style: "margin: 0; flex-grow: 1;", "{collection.description}" }
                        LangLink {
                            to: Route::CollectionViewPage {
                                id: collection.id,
                                lang: String::new(),
                                isPrivate: !collection.is_public,
                            },
                            "{view_button}"
                        }
                    }
                }
            }
            PaginationControls {
                pagination: handle.pagination,
                on_page: move |page: u64| {
                    update_filters.call(FilterUpdate::page(page));
                },
            }
        },
    };

    rsx! {
        div {
            class: "x-page",
            style: "display: flex; flex-direction: column; align-items: center; padding: 24px;",
            div {
                style: "width: 100%; max-width: 1100px;",
                h1 { style: "text-align: center;", "{title}" }
                if is_logged_in {
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; justify-content: center; gap: 8px; margin-bottom: 16px;",
                        span { class: "x-filter-tag", "{private_label}" }
                        input {
                            r#type: "checkbox",
                            checked: private_checked,
                            onchange: move |event| {
                                update_filters
                                    .call(FilterUpdate {
                                        is_private: Some(event.checked()),
                                        ..Default::default()
                                    });
                            },
                        }
                    }
                }
                {body}
            }
        }
    }
}
