use dioxus::prelude::*;

use crate::components::lang_link::LangLink;
use crate::i18n::tr;
use crate::locale::use_locale;
use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let lang = use_locale().current();
    let message = tr(lang, "not_found");
    let path = segments.join("/");

    rsx! {
        div {
            class: "x-page",
            style: "display: flex; flex-direction: column; align-items: center; padding: 60px; gap: 12px;",
            h1 { "404" }
            div { "{message}" }
            code { "/{path}" }
            LangLink { to: Route::HomePage {}, "⌂" }
        }
    }
}
