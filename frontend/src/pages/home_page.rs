use dioxus::prelude::*;

use crate::components::lang_link::LangLink;
use crate::i18n::tr;
use crate::locale::use_locale;
use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    let lang = use_locale().current();
    let tagline = tr(lang, "home_tagline");
    let nav_search = tr(lang, "nav_search");
    let nav_collections = tr(lang, "nav_collections");

    rsx! {
        Title { "Sudan Digital Archive" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    font-size: 42px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Sudan Digital Archive"
            }
            div {
                style: "
                    font-size: 24px;
                    line-height: 1.6;
                    max-width: 620px;
                ",
                "{tagline}"
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                HomeCard {
                    title: nav_search,
                    to: Route::ArchivePage { lang: String::new() },
                }
                HomeCard {
                    title: nav_collections,
                    to: Route::CollectionsPage { lang: String::new(), isPrivate: false },
                }
            }
        }
    }
}

#[component]
fn HomeCard(title: String, to: Route) -> Element {
    rsx! {
        div {
            class: "x-home-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 320px;
                min-height: 120px;
                border-radius: 22px;
                padding: 22px;
                border: 1px solid rgba(0,0,0,0.15);
                box-shadow: 0 8px 24px rgba(0,0,0,0.08);
            ",
            div {
                style: "font-size: 26px; font-weight: 500;",
                LangLink { to, "{title}" }
            }
        }
    }
}
