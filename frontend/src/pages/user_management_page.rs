//! Admin panel: paginated user list with a debounced email filter and
//! create/update/delete actions. The list is only ever mutated by
//! re-fetching after the server confirmed a change.

use common::archive_query::FilterUpdate;
use common::user_admin::{CreateUserPayload, UpdateUserPayload, User, UserRole};
use dioxus::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::components::pagination_controls::PaginationControls;
use crate::config::use_archive_api;
use crate::hooks::use_debounced::use_debounced;
use crate::hooks::use_users::use_users;
use crate::i18n::tr;
use crate::locale::use_locale;

#[component]
pub fn UserManagementPage() -> Element {
    let api = use_archive_api();
    let locale = use_locale();
    let lang = locale.current();
    let handle = use_users();
    let update_filters = handle.update_filters;
    let refresh = handle.refresh;
    let mut notice = use_signal(|| None::<String>);

    // debounced email filter; applying it also rewinds to the first page
    let mut email_filter = use_signal(String::new);
    let debounced_email = use_debounced(email_filter.into());
    use_effect(move || {
        let email = debounced_email.read().clone();
        update_filters.call(FilterUpdate {
            email: Some(email),
            page: Some(0),
            ..Default::default()
        });
    });

    let create_api = api.clone();
    let create_user = use_callback(move |payload: CreateUserPayload| {
        let api = create_api.clone();
        let ui_lang = locale.peek();
        spawn(async move {
            match api.create_user(&payload).await {
                Ok(()) => refresh.call(()),
                Err(err) => {
                    dioxus::logger::tracing::error!("creating user failed: {err:#}");
                    notice.set(Some(tr(ui_lang, "users_error_create")));
                }
            }
        });
    });

    let update_api = api.clone();
    let update_user = use_callback(move |(user_id, payload): (String, UpdateUserPayload)| {
        let api = update_api.clone();
        let ui_lang = locale.peek();
        spawn(async move {
            match api.update_user(&user_id, &payload).await {
                Ok(()) => refresh.call(()),
                Err(err) => {
                    dioxus::logger::tracing::error!("updating user failed: {err:#}");
                    notice.set(Some(tr(ui_lang, "users_error_update")));
                }
            }
        });
    });

    let delete_api = api.clone();
    let delete_user = use_callback(move |user_id: String| {
        let api = delete_api.clone();
        let ui_lang = locale.peek();
        spawn(async move {
            match api.delete_user(&user_id).await {
                Ok(()) => refresh.call(()),
                Err(err) => {
                    dioxus::logger::tracing::error!("deleting user failed: {err:#}");
                    notice.set(Some(tr(ui_lang, "users_error_delete")));
                }
            }
        });
    });

    // create-user form
    let mut new_email = use_signal(String::new);
    let mut new_role = use_signal(|| UserRole::Contributor);
    let mut new_active = use_signal(|| true);

    let title = tr(lang, "users_title");
    let email_placeholder = tr(lang, "users_email_filter_placeholder");
    let create_label = tr(lang, "users_create");
    let active_label = tr(lang, "users_active");
    let new_role_name = new_role.read().display_name();

    let users = handle.items.read().clone();
    let table = match users {
        None if !*handle.has_failed.read() => rsx! { LoadingIndicator {} },
        None => rsx! {},
        Some(users) => rsx! {
            table {
                class: "x-users-table",
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "text-align: start; padding: 6px;", "Email" }
                        th { style: "text-align: start; padding: 6px;", "Role" }
                        th { style: "text-align: start; padding: 6px;", "{active_label}" }
                        th { style: "padding: 6px;" }
                    }
                }
                tbody {
                    for user in users.iter().cloned() {
                        UserRow {
                            key: "{user.id}",
                            user,
                            on_update: update_user,
                            on_delete: delete_user,
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
        Title { "Sudan Digital Archive: User Management" }
        div {
            class: "x-page",
            style: "display: flex; flex-direction: column; align-items: center; padding: 24px;",
            div {
                style: "width: 100%; max-width: 900px; display: flex; flex-direction: column; gap: 14px;",
                h1 { style: "text-align: center;", "{title}" }

                input {
                    r#type: "text",
                    class: "x-filter-input",
                    value: "{email_filter}",
                    placeholder: email_placeholder,
                    oninput: move |event| email_filter.set(event.value()),
                }

                div {
                    class: "x-user-create-row",
                    style: "display: flex; flex-direction: row; align-items: center; gap: 10px; flex-wrap: wrap;",
                    input {
                        r#type: "email",
                        class: "x-filter-input",
                        style: "flex-grow: 1;",
                        value: "{new_email}",
                        placeholder: "email@example.org",
                        oninput: move |event| new_email.set(event.value()),
                    }
                    select {
                        value: "{new_role_name}",
                        onchange: move |event| {
                            if let Ok(role) = event.value().parse::<UserRole>() {
                                new_role.set(role);
                            }
                        },
                        for role in UserRole::all() {
                            option {
                                value: "{role.display_name()}",
                                selected: role == *new_role.read(),
                                "{role.display_name()}"
                            }
                        }
                    }
                    label { "{active_label}" }
                    input {
                        r#type: "checkbox",
                        checked: *new_active.read(),
                        onchange: move |event| new_active.set(event.checked()),
                    }
                    button {
                        class: "x-primary-button",
                        style: "cursor: pointer; padding: 6px 14px; border-radius: 8px;",
                        disabled: new_email.read().is_empty(),
                        onclick: move |_| {
                            create_user
                                .call(CreateUserPayload {
                                    email: new_email.peek().clone(),
                                    is_active: *new_active.peek(),
                                    role: *new_role.peek(),
                                });
                            new_email.set(String::new());
                        },
                        "{create_label}"
                    }
                }

                if let Some(message) = notice.read().clone() {
                    div { class: "x-notice-error", "{message}" }
                }

                {table}
            }
        }
    }
}

#[component]
fn UserRow(
    user: ReadSignal<User>,
    on_update: Callback<(String, UpdateUserPayload)>,
    on_delete: Callback<String>,
) -> Element {
    let locale = use_locale();
    let lang = locale.current();
    let initial = user.peek().clone();
    let mut role = use_signal(move || initial.role);
    let mut active = use_signal(move || initial.is_active);

    // a refresh replaces the row's user; local edits reset to the fresh data
    use_effect(move || {
        let fresh = user.read().clone();
        role.set(fresh.role);
        active.set(fresh.is_active);
    });

    let save_label = tr(lang, "users_save");
    let delete_label = tr(lang, "users_delete");
    let current = user.read().clone();
    let role_name = role.read().display_name();

    rsx! {
        tr {
            style: "border-top: 1px solid rgba(0,0,0,0.15);",
            td { style: "padding: 6px;", "{current.email}" }
            td {
                style: "padding: 6px;",
                select {
                    value: "{role_name}",
                    onchange: move |event| {
                        if let Ok(parsed) = event.value().parse::<UserRole>() {
                            role.set(parsed);
                        }
                    },
                    for option_role in UserRole::all() {
                        option {
                            value: "{option_role.display_name()}",
                            selected: option_role == *role.read(),
                            "{option_role.display_name()}"
                        }
                    }
                }
            }
            td {
                style: "padding: 6px;",
                input {
                    r#type: "checkbox",
                    checked: *active.read(),
                    onchange: move |event| active.set(event.checked()),
                }
            }
            td {
                style: "padding: 6px; display: flex; flex-direction: row; gap: 8px;",
                button {
                    style: "cursor: pointer;",
                    onclick: move |_| {
                        on_update
                            .call((
                                user.peek().id.clone(),
                                UpdateUserPayload {
                                    is_active: *active.peek(),
                                    role: *role.peek(),
                                },
                            ));
                    },
                    "{save_label}"
                }
                button {
                    style: "cursor: pointer; color: darkred;",
                    onclick: move |_| on_delete.call(user.peek().id.clone()),
                    "{delete_label}"
                }
            }
        }
    }
}
