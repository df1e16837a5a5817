use dioxus::prelude::*;

use crate::api::{SORT_PARAM, WINDOW_PARAM};
use crate::components::{current_search, navigate};
use crate::config::Settings;
use crate::filter::{
    apply_selection_change, commits_search, search_options, SelectionChange, TokenSet,
};
use crate::query::{append_navigation_params, subreddits_search};

/// Label, `sort` and `t` for each listing button.
const SORT_CHOICES: [(&str, &str, &str); 4] = [
    ("Hot", "hot", "day"),
    ("Top this week", "top", "week"),
    ("Top this month", "top", "month"),
    ("New", "new", "day"),
];

/// Keep the chip set and the `#subredditsParam` field in step for one change.
fn apply_change(mut selected: Signal<TokenSet>, mut field: Signal<String>, change: SelectionChange) {
    // Repeated picks and unknown removals leave the field alone.
    if !selected.write().apply(&change) {
        return;
    }
    let next = apply_selection_change(&field.peek(), &change);
    tracing::debug!(?change, field = %next, "filter changed");
    field.set(next);
}

fn go(search: &str) {
    if let Err(err) = navigate(search) {
        tracing::warn!("navigation failed: {err}");
    }
}

fn sort_by(sort: &str, window: &str) {
    match append_navigation_params(&current_search(), &[SORT_PARAM, WINDOW_PARAM], &[sort, window])
    {
        Ok(search) => go(&search),
        Err(err) => tracing::warn!("could not build sort link: {err}"),
    }
}

/// Searchable multi-select over subreddit names plus the text field it
/// writes, submitted as `?subreddits=`.
#[component]
pub fn FilterBar(initial: String, options: Vec<String>) -> Element {
    let settings = use_context::<Settings>();
    let selected = use_signal({
        let initial = initial.clone();
        move || TokenSet::parse(&initial)
    });
    let field = use_signal(move || initial);
    let mut query = use_signal(String::new);

    let chips: Vec<String> = selected.read().iter().map(str::to_string).collect();
    let matches: Vec<String> = search_options(
        &options,
        &selected.read(),
        &query.read(),
        settings.search_contains,
    )
    .into_iter()
    .map(str::to_string)
    .collect();
    let typed = query.read().trim().to_string();
    let first_match = matches.first().cloned();
    let no_results = matches.is_empty();

    let on_search_key = move |evt: KeyboardEvent| {
        if !commits_search(&evt.key().to_string()) {
            return;
        }
        evt.prevent_default();
        // Takes the top suggestion, or the typed name when nothing matches.
        let token = first_match.clone().unwrap_or_else(|| typed.clone());
        if !token.is_empty() {
            apply_change(selected, field, SelectionChange::Selected(token));
        }
        query.set(String::new());
    };

    rsx! {
        form {
            class: "filter",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                go(&subreddits_search(&field.read()));
            },
            div { class: "chosen-select chosen-container chosen-container-multi",
                ul { class: "chosen-choices",
                    for chip in chips {
                        {
                            let label = chip.clone();
                            rsx! {
                                li { key: "{label}", class: "search-choice",
                                    span { "{label}" }
                                    button {
                                        r#type: "button",
                                        class: "search-choice-close",
                                        onclick: move |_| {
                                            apply_change(selected, field, SelectionChange::Deselected(chip.clone()))
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                    li { class: "search-field",
                        input {
                            r#type: "text",
                            placeholder: "Choose some subreddits",
                            value: "{query}",
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                            onkeydown: on_search_key,
                        }
                    }
                }
                ul { class: "chosen-results",
                    if no_results {
                        li { class: "no-results", "{settings.no_results_text} \"{query}\"" }
                    }
                    for option in matches {
                        {
                            let label = option.clone();
                            rsx! {
                                li {
                                    key: "{label}",
                                    class: "active-result",
                                    onclick: move |_| {
                                        apply_change(selected, field, SelectionChange::Selected(option.clone()));
                                        query.set(String::new());
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
            input {
                id: "subredditsParam",
                name: "subreddits",
                r#type: "text",
                class: "form-control",
                value: "{field}",
                oninput: move |evt: FormEvent| {
                    let (mut selected, mut field) = (selected, field);
                    let value = evt.value();
                    // Hand edits redefine the chips.
                    selected.set(TokenSet::parse(&value));
                    field.set(value);
                },
            }
            button { r#type: "submit", class: "btn btn-primary", "Go" }
            div { class: "sort-options",
                for (label , sort , window) in SORT_CHOICES {
                    button {
                        r#type: "button",
                        class: "btn btn-default",
                        onclick: move |_| sort_by(sort, window),
                        "{label}"
                    }
                }
            }
        }
    }
}
