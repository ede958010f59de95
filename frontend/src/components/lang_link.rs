//! Language-preserving internal links.

use client::locale::UiLang;
use dioxus::prelude::*;

use crate::locale::use_locale;
use crate::routes::Route;

/// Rewrites a route so it carries the given language tag. Routes without a
/// language parameter pass through untouched.
pub fn with_lang(route: Route, lang: UiLang) -> Route {
    let tag = lang.tag().to_string();
    match route {
        Route::ArchivePage { .. } => Route::ArchivePage { lang: tag },
        Route::CollectionsPage { isPrivate, .. } => Route::CollectionsPage {
            lang: tag,
            isPrivate,
        },
        Route::CollectionViewPage { id, isPrivate, .. } => Route::CollectionViewPage {
            id,
            lang: tag,
            isPrivate,
        },
        other => other,
    }
}

/// Use this for all internal navigation so the interface language survives
/// the jump; external links use a plain anchor.
#[component]
pub fn LangLink(to: Route, children: Element) -> Element {
    let locale = use_locale();
    let to = with_lang(to, locale.current());
    rsx! {
        Link { to, {children} }
    }
}
