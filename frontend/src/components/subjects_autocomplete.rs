//! Subject multi-select with vocabulary autocomplete.
//!
//! The vocabulary is fetched per interface language. Locked IDs (from a
//! collection) are seeded into the selection once the vocabulary arrives and
//! render without a remove button. Logged-in users can create and delete
//! vocabulary entries; neither mutation touches the local list until the
//! server confirmed it.

use common::archive_records::Subject;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::MdDelete,
        md_navigation_icons::MdClose,
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
    },
};

use client::locked_subjects::seed_locked;

use crate::components::loading::LoadingIndicator;
use crate::config::use_archive_api;
use crate::i18n::tr;
use crate::locale::use_locale;
use crate::session::use_user_session;

fn subject_label(vocabulary: &[Subject], id: u64) -> String {
    vocabulary
        .iter()
        .find(|subject| subject.id == id)
        .map(|subject| subject.subject.clone())
        .unwrap_or_else(|| id.to_string())
}

#[component]
pub fn SubjectsAutocomplete(
    selected: ReadSignal<Vec<u64>>,
    locked: ReadSignal<Vec<u64>>,
    on_change: Callback<Vec<u64>>,
) -> Element {
    let api = use_archive_api();
    let locale = use_locale();
    let session = use_user_session();
    let lang = locale.current();
    let mut notice = use_signal(|| None::<String>);
    let mut filter_text = use_signal(String::new);
    let mut is_mutating = use_signal(|| false);

    let list_api = api.clone();
    let mut subjects = use_resource(move || {
        let api = list_api.clone();
        let lang = locale.current().api_lang();
        async move { api.list_subjects(lang).await }
    });
    // the language switch swaps the vocabulary
    use_effect(move || {
        let _ = locale.current();
        subjects.clear();
        subjects.restart();
    });

    let vocabulary = use_memo(move || match subjects.read().as_ref() {
        Some(Ok(page)) => page.items.clone(),
        _ => Vec::new(),
    });
    let is_loading = use_memo(move || subjects.read().is_none());
    use_effect(move || {
        if let Some(Err(err)) = subjects.read().as_ref() {
            dioxus::logger::tracing::error!("fetching subjects failed: {err:#}");
            notice.set(Some(tr(
                locale.current(),
                "subjects_autocomplete_error_fetching_subjects",
            )));
        }
    });

    // seed locked IDs once the vocabulary is in, without duplicates
    use_effect(move || {
        let locked_ids = locked.read().clone();
        if locked_ids.is_empty() || vocabulary.read().is_empty() {
            return;
        }
        let current = selected.peek().clone();
        let seeded = seed_locked(&current, &locked_ids);
        if seeded != current {
            on_change.call(seeded);
        }
    });

    let toggle_subject = use_callback(move |id: u64| {
        let mut next = selected.peek().clone();
        if let Some(position) = next.iter().position(|&existing| existing == id) {
            next.remove(position);
        } else {
            next.push(id);
        }
        // locked removals are undone upstream by the locked-set merge
        on_change.call(next);
    });

    let create_api = api.clone();
    let create_subject = use_callback(move |name: String| {
        let api = create_api.clone();
        let api_lang = locale.current().api_lang();
        let ui_lang = locale.current();
        is_mutating.set(true);
        spawn(async move {
            match api.create_subject(&name, api_lang).await {
                Ok(subject) => {
                    let mut next = selected.peek().clone();
                    next.push(subject.id);
                    on_change.call(next);
                    filter_text.set(String::new());
                    subjects.clear();
                    subjects.restart();
                }
                Err(err) => {
                    dioxus::logger::tracing::error!("creating subject failed: {err:#}");
                    notice.set(Some(tr(ui_lang, "subjects_autocomplete_error_creating_subject")));
                }
            }
            is_mutating.set(false);
        });
    });

    let delete_api = api.clone();
    let delete_subject = use_callback(move |id: u64| {
        let api = delete_api.clone();
        let api_lang = locale.current().api_lang();
        let ui_lang = locale.current();
        is_mutating.set(true);
        spawn(async move {
            match api.delete_subject(id, api_lang).await {
                Ok(()) => {
                    let next: Vec<u64> = selected
                        .peek()
                        .iter()
                        .copied()
                        .filter(|&existing| existing != id)
                        .collect();
                    on_change.call(next);
                    subjects.clear();
                    subjects.restart();
                }
                Err(err) => {
                    dioxus::logger::tracing::error!("deleting subject failed: {err:#}");
                    notice.set(Some(tr(ui_lang, "subjects_autocomplete_error_deleting_subject")));
                }
            }
            is_mutating.set(false);
        });
    });

    let placeholder = tr(lang, "subjects_autocomplete_search_subjects");
    let no_subjects = tr(lang, "subjects_autocomplete_no_subjects_found");
    let create_label = tr(lang, "subjects_autocomplete_create");
    let is_logged_in = *session.is_logged_in.read();

    let needle = filter_text.read().to_lowercase();
    let visible: Vec<Subject> = vocabulary
        .read()
        .iter()
        .filter(|subject| needle.is_empty() || subject.subject.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    let exact_match = vocabulary
        .read()
        .iter()
        .any(|subject| subject.subject.eq_ignore_ascii_case(filter_text.read().as_str()));
    let can_create = is_logged_in && !filter_text.read().is_empty() && !exact_match;
    let selected_ids = selected.read().clone();
    let locked_ids = locked.read().clone();
    let vocab_now = vocabulary.read().clone();

    rsx! {
        div {
            class: "x-subjects-autocomplete",
            style: "display: flex; flex-direction: column; gap: 8px; min-width: 280px;",

            // selected chips; locked ones carry no remove button
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                for id in selected_ids.iter().copied() {
                    span {
                        key: "{id}",
                        class: "x-subject-chip",
                        style: "display: inline-flex; align-items: center; gap: 4px; border: 1px solid rgba(0,0,0,0.4); border-radius: 1000px; padding: 2px 10px;",
                        "{subject_label(&vocab_now, id)}"
                        if !locked_ids.contains(&id) {
                            button {
                                style: "border: none; background: none; cursor: pointer; padding: 0;",
                                onclick: move |_| toggle_subject.call(id),
                                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                            }
                        }
                    }
                }
            }

            input {
                r#type: "text",
                class: "x-filter-input",
                value: "{filter_text}",
                placeholder: placeholder,
                disabled: *is_mutating.read(),
                oninput: move |event| filter_text.set(event.value()),
            }

            if *is_loading.read() {
                LoadingIndicator {}
            } else if visible.is_empty() && !can_create {
                div { class: "x-subjects-empty", "{no_subjects}" }
            } else {
                ul {
                    class: "x-subjects-options",
                    style: "max-height: 220px; overflow-y: auto; margin: 0; padding: 0; list-style: none;",
                    for subject in visible.iter().cloned() {
                        li {
                            key: "{subject.id}",
                            style: "display: flex; flex-direction: row; align-items: center; gap: 8px; padding: 4px; cursor: pointer;",
                            onclick: {
                                let id = subject.id;
                                move |_| toggle_subject.call(id)
                            },
                            if selected_ids.contains(&subject.id) {
                                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                            } else {
                                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                            }
                            span { style: "flex-grow: 1;", "{subject.subject}" }
                            if is_logged_in {
                                button {
                                    style: "border: none; background: none; cursor: pointer;",
                                    disabled: *is_mutating.read(),
                                    onclick: {
                                        let id = subject.id;
                                        move |event: Event<MouseData>| {
                                            event.stop_propagation();
                                            delete_subject.call(id);
                                        }
                                    },
                                    Icon { icon: MdDelete, style: "width: 18px; height: 18px; color: darkred;" }
                                }
                            }
                        }
                    }
                }
            }

            if can_create {
                button {
                    class: "x-subject-create",
                    style: "cursor: pointer; border: 1px dashed rgba(0,0,0,0.5); border-radius: 6px; padding: 6px;",
                    disabled: *is_mutating.read(),
                    onclick: move |_| create_subject.call(filter_text.peek().clone()),
                    "{create_label} \"{filter_text}\""
                }
            }

            if let Some(message) = notice.read().clone() {
                div { class: "x-notice-error", "{message}" }
            }
        }
    }
}
