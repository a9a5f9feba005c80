//! Login Page
//!
//! A single button that signs in a placeholder user. No identity is checked.

use leptos::*;
use newsdesk::{Session, User};

use crate::state::use_global_state;

/// Login page component
#[component]
pub fn Login(set_session: WriteSignal<Session>) -> impl IntoView {
    let state = use_global_state();
    let name = state
        .config
        .with_value(|c| c.session.placeholder_name.clone());

    let on_login = move |_| sign_in_placeholder(set_session, &name);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Login"</h1>
            <button
                on:click=on_login
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Login"
            </button>
        </div>
    }
}

/// Hand a fresh placeholder user to the shell
pub fn sign_in_placeholder(set_session: WriteSignal<Session>, name: &str) {
    set_session.update(|session| session.sign_in(User::placeholder(name)));
}
