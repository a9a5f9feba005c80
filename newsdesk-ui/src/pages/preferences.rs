//! Preferences Page
//!
//! Topic checkboxes backed by a local selection set. Saving only traces the
//! payload; nothing is stored or sent.

use leptos::*;
use newsdesk::{preferences, PreferenceSelection, Session, Topic};
use wasm_bindgen::JsCast;

use crate::state::use_global_state;

/// Preferences page component
#[component]
pub fn Preferences(session: ReadSignal<Session>) -> impl IntoView {
    let state = use_global_state();
    let topics = state.config.with_value(|c| c.topics.topics().to_vec());

    // Owned by this view; dropped when the route changes
    let selection = create_rw_signal(PreferenceSelection::new());

    let on_submit = move |_| {
        session.with_untracked(|s| {
            selection.with_untracked(|sel| {
                preferences::submit(s.current_user(), sel);
            })
        })
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">
                {move || session.with(|s| preferences::heading(s.current_user()))}
            </h1>

            <div class="flex flex-col space-y-2">
                {topics.into_iter().map(|topic| view! {
                    <TopicCheckbox topic=topic selection=selection />
                }).collect_view()}
            </div>

            <button
                on:click=on_submit
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Save Preferences"
            </button>
        </div>
    }
}

#[component]
fn TopicCheckbox(topic: Topic, selection: RwSignal<PreferenceSelection>) -> impl IntoView {
    let Topic { id, label } = topic;

    // The checkbox value carries the topic id
    let on_change = move |event: web_sys::Event| {
        let input = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            toggle_topic(selection, &input.value(), input.checked());
        }
    };

    view! {
        <label class="flex items-center space-x-2">
            <input type="checkbox" value=id on:change=on_change />
            <span>{label}</span>
        </label>
    }
}

/// Apply one checkbox change to the selection
pub fn toggle_topic(selection: RwSignal<PreferenceSelection>, topic: &str, checked: bool) {
    selection.update(|s| s.set(topic, checked));
}
