//! Previous/next pager. Pages are 0-indexed in state, 1-indexed on screen.

use client::filter_sync::PaginationState;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_navigation_icons::{MdArrowBack, MdArrowForward},
};

use crate::i18n::tr;
use crate::locale::use_locale;

#[component]
pub fn PaginationControls(pagination: ReadSignal<PaginationState>, on_page: Callback<u64>) -> Element {
    let lang = use_locale().current();
    let state = *pagination.read();
    let page_word = tr(lang, "archive_pagination_page");
    let out_of = tr(lang, "archive_pagination_page_out_of");
    let shown_page = state.current_page + 1;

    rsx! {
        div {
            class: "x-pagination",
            style: "display: flex; flex-direction: row; align-items: center; justify-content: center; gap: 10px; margin-top: 12px;",
            if state.current_page != 0 {
                button {
                    class: "x-pagination-button",
                    style: "cursor: pointer; border: none; background: none;",
                    onclick: move |_| on_page.call(state.current_page - 1),
                    Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
                }
            }
            div {
                "{page_word}"
                b { "{shown_page}" }
                "{out_of}"
                b { "{state.total_pages}" }
            }
            if state.current_page + 1 < state.total_pages {
                button {
                    class: "x-pagination-button",
                    style: "cursor: pointer; border: none; background: none;",
                    onclick: move |_| on_page.call(state.current_page + 1),
                    Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}
