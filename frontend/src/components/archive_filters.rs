//! The archive filter panel.
//!
//! Free-text and URL inputs are debounced independently before they reach
//! the filter state; dates, the private switch, and subject selections apply
//! immediately. Subject changes pass through the locked-set merge so a
//! collection's pinned subjects cannot be filtered away.

use client::locked_subjects::merge_with_locked;
use common::archive_query::{FilterUpdate, QueryFilters};
use dioxus::prelude::*;

use crate::components::subjects_autocomplete::SubjectsAutocomplete;
use crate::hooks::use_debounced::use_debounced;
use crate::i18n::tr;
use crate::locale::use_locale;

fn date_input_value(wire: &str) -> String {
    // wire format is YYYY-MM-DDT00:00:00; the input wants the date part
    wire.split('T').next().unwrap_or_default().to_string()
}

#[component]
pub fn ArchiveFilters(
    filters: ReadSignal<QueryFilters>,
    update_filters: Callback<FilterUpdate>,
    is_logged_in: ReadSignal<bool>,
    locked_subject_ids: ReadSignal<Vec<u64>>,
    show_subject_filters: bool,
) -> Element {
    let locale = use_locale();
    let lang = locale.current();

    let mut query_term = use_signal(move || filters.peek().query_term.clone());
    let debounced_query = use_debounced(query_term.into());
    let mut url_filter_term = use_signal(move || filters.peek().url_filter.clone());
    let debounced_url_filter = use_debounced(url_filter_term.into());

    use_effect(move || {
        let value = debounced_query.read().clone();
        update_filters.call(FilterUpdate {
            query_term: Some(value),
            ..Default::default()
        });
    });
    use_effect(move || {
        let value = debounced_url_filter.read().clone();
        update_filters.call(FilterUpdate {
            url_filter: Some(value),
            ..Default::default()
        });
    });

    let set_date = use_callback(move |(value, is_from): (String, bool)| {
        // clearing the picker clears the filter
        let wire = if value.is_empty() {
            String::new()
        } else {
            format!("{value}T00:00:00")
        };
        let update = if is_from {
            FilterUpdate {
                date_from: Some(wire),
                ..Default::default()
            }
        } else {
            FilterUpdate {
                date_to: Some(wire),
                ..Default::default()
            }
        };
        update_filters.call(update);
    });

    let on_subjects_change = use_callback(move |new_selection: Vec<u64>| {
        let merged = merge_with_locked(
            &locked_subject_ids.peek(),
            &filters.peek().metadata_subjects,
            &new_selection,
        );
        update_filters.call(FilterUpdate {
            metadata_subjects: Some(merged),
            ..Default::default()
        });
    });

    let url_placeholder = tr(lang, "archive_url_filter_placeholder");
    let query_placeholder = tr(lang, "archive_text_search_query_placeholder");
    let date_from_label = tr(lang, "archive_date_from_filter");
    let date_to_label = tr(lang, "archive_date_to_filter");
    let private_label = tr(lang, "archive_filter_private_records");

    let date_from_value = date_input_value(&filters.read().date_from);
    let date_to_value = date_input_value(&filters.read().date_to);
    let is_private = filters.read().is_private.unwrap_or(false);

    let has_locked = !locked_subject_ids.read().is_empty();
    let has_subjects = !filters.read().metadata_subjects.is_empty();
    let inclusive = filters
        .read()
        .metadata_subjects_inclusive_filter
        .unwrap_or(false);
    let inclusive_label = if inclusive {
        tr(lang, "exclusive")
    } else {
        tr(lang, "inclusive")
    };

    rsx! {
        div {
            class: "x-archive-filters",
            style: "width: 100%; display: flex; flex-direction: column; gap: 12px;",

            input {
                r#type: "text",
                class: "x-filter-input",
                value: "{url_filter_term}",
                placeholder: url_placeholder,
                oninput: move |event| url_filter_term.set(event.value()),
            }
            input {
                r#type: "text",
                class: "x-filter-input",
                value: "{query_term}",
                placeholder: query_placeholder,
                oninput: move |event| query_term.set(event.value()),
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px; flex-wrap: wrap;",
                span { class: "x-filter-tag", "{date_from_label}" }
                input {
                    r#type: "date",
                    value: "{date_from_value}",
                    oninput: move |event| set_date.call((event.value(), true)),
                }
                span { class: "x-filter-tag", "{date_to_label}" }
                input {
                    r#type: "date",
                    value: "{date_to_value}",
                    oninput: move |event| set_date.call((event.value(), false)),
                }
                if *is_logged_in.read() {
                    span { class: "x-filter-tag", "{private_label}" }
                    input {
                        r#type: "checkbox",
                        checked: is_private,
                        onchange: move |event| {
                            update_filters
                                .call(FilterUpdate {
                                    is_private: Some(event.checked()),
                                    ..Default::default()
                                });
                        },
                    }
                }
            }

            if show_subject_filters {
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 16px; flex-wrap: wrap;",
                    SubjectsAutocomplete {
                        selected: filters.read().metadata_subjects.clone(),
                        locked: locked_subject_ids.read().clone(),
                        on_change: on_subjects_change,
                    }
                    if has_subjects && !has_locked {
                        span { class: "x-filter-tag", "{inclusive_label}" }
                        input {
                            r#type: "checkbox",
                            checked: inclusive,
                            onchange: move |event| {
                                update_filters
                                    .call(FilterUpdate {
                                        metadata_subjects_inclusive_filter: Some(event.checked()),
                                        ..Default::default()
                                    });
                            },
                        }
                    }
                }
            }
        }
    }
}
