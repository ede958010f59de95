use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "font-size: 22px; padding: 10px; margin: 15px; text-align: center;",
            "..."
        }
    }
}
