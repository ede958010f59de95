use client::api::ArchiveApi;
use client::locale::UiLang;
use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::config::{API_URL, ApiHandle};
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| ApiHandle(ArchiveApi::new(API_URL)));
    crate::locale::provide_locale(UiLang::En);
    crate::session::provide_user_session();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
