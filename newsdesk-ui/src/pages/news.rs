//! News Page
//!
//! Greets the signed-in user. Guests get a link to the login view.

use leptos::*;
use leptos_router::*;
use newsdesk::{news, AppRoute, Session};

use crate::state::use_global_state;

/// News page component
#[component]
pub fn News(session: ReadSignal<Session>) -> impl IntoView {
    let state = use_global_state();
    let login_path = state.routes.with_value(|table| {
        table
            .path_for(AppRoute::Login)
            .unwrap_or("/")
            .to_string()
    });

    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">"News"</h1>
            <p class="text-gray-300">
                {move || session.with(|s| news::greeting(s.current_user()))}
            </p>
            <Show when=move || session.with(|s| !s.is_signed_in())>
                <A href=login_path.clone() class="text-blue-400 hover:underline">
                    "Log in"
                </A>
            </Show>
        </div>
    }
}
