//! Login form.

use dioxus::prelude::*;

use crate::config::use_archive_api;
use crate::i18n::tr;
use crate::locale::use_locale;
use crate::routes::Route;
use crate::session::use_user_session;

#[component]
pub fn LoginPage() -> Element {
    let api = use_archive_api();
    let locale = use_locale();
    let session = use_user_session();
    let lang = locale.current();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let submit = use_callback(move |_: ()| {
        let api = api.clone();
        let ui_lang = locale.peek();
        let mut is_logged_in = session.is_logged_in;
        is_submitting.set(true);
        notice.set(None);
        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        spawn(async move {
            match api.login(&email_value, &password_value).await {
                Ok(()) => {
                    is_logged_in.set(true);
                    navigator().push(Route::HomePage {});
                }
                Err(err) => {
                    dioxus::logger::tracing::error!("login failed: {err:#}");
                    notice.set(Some(tr(ui_lang, "login_failed")));
                }
            }
            is_submitting.set(false);
        });
    });

    let title = tr(lang, "login_title");
    let email_label = tr(lang, "login_email");
    let password_label = tr(lang, "login_password");
    let submit_label = tr(lang, "login_submit");

    rsx! {
        Title { "Sudan Digital Archive: Login" }
        div {
            class: "x-page",
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px;",
            div {
                style: "display: flex; flex-direction: column; gap: 12px; width: 320px;",
                h1 { style: "text-align: center;", "{title}" }
                label { "{email_label}" }
                input {
                    r#type: "email",
                    class: "x-filter-input",
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
                label { "{password_label}" }
                input {
                    r#type: "password",
                    class: "x-filter-input",
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            submit.call(());
                        }
                    },
                }
                button {
                    class: "x-primary-button",
                    style: "cursor: pointer; padding: 8px; border-radius: 8px;",
                    disabled: *is_submitting.read(),
                    onclick: move |_| submit.call(()),
                    "{submit_label}"
                }
                if let Some(message) = notice.read().clone() {
                    div { class: "x-notice-error", "{message}" }
                }
            }
        }
    }
}
