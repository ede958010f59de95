//! Top navigation bar and page frame.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdHome};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::lang_link::LangLink;
use crate::i18n::{toggle_label, tr};
use crate::locale::use_locale;
use crate::routes::Route;
use crate::session::use_user_session;

/// Shared navigation header; also the router layout wrapping every page.
#[component]
pub fn Navbar() -> Element {
    let locale = use_locale();
    let session = use_user_session();
    let lang = locale.current();
    let is_logged_in = *session.is_logged_in.read();
    let is_admin = session.is_admin();

    let nav_search = tr(lang, "nav_search");
    let nav_collections = tr(lang, "nav_collections");
    let nav_login = tr(lang, "nav_login");
    let nav_users = tr(lang, "nav_user_management");
    let language_toggle = toggle_label(lang);

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            header {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    padding: 12px 24px;
                    border-bottom: 3px solid #7adfdf;
                ",

                LangLink {
                    to: Route::HomePage {},
                    Icon { icon: MdHome, style: "width: 26px; height: 26px;" }
                }

                nav {
                    "aria-label": "navigation-menu",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 16px;
                        flex-grow: 1;
                    ",
                    LangLink { to: Route::ArchivePage { lang: String::new() }, "{nav_search}" }
                    LangLink {
                        to: Route::CollectionsPage { lang: String::new(), isPrivate: false },
                        "{nav_collections}"
                    }
                    if !is_logged_in {
                        LangLink { to: Route::LoginPage {}, "{nav_login}" }
                    }
                    if is_admin {
                        LangLink { to: Route::UserManagementPage {}, "{nav_users}" }
                    }
                }

                // flips the interface language; pages subscribed to the
                // locale push the matching `lang` filter themselves
                button {
                    class: "x-language-toggle",
                    style: "
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 1000px;
                        background: white;
                        padding: 6px 14px;
                        font-size: 15px;
                    ",
                    onclick: move |_| {
                        locale.toggle();
                    },
                    "{language_toggle}"
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
