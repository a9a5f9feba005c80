//! Navigation Component
//!
//! Header navigation bar with brand, route links and the signed-in user.

use leptos::*;
use leptos_router::*;
use newsdesk::{AppRoute, Session};

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav(session: ReadSignal<Session>) -> impl IntoView {
    let state = use_global_state();

    let links: Vec<(String, &'static str)> = state.routes.with_value(|table| {
        [AppRoute::News, AppRoute::Preferences, AppRoute::Login]
            .into_iter()
            .filter_map(|route| table.path_for(route).map(|p| (p.to_string(), route.label())))
            .collect()
    });

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <span class="flex items-center space-x-3">
                        <span class="text-2xl">"📰"</span>
                        <span class="text-xl font-bold text-white">"Newsdesk"</span>
                    </span>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {links.into_iter().map(|(href, label)| view! {
                            <NavLink href=href label=label />
                        }).collect_view()}
                    </div>

                    // Current user
                    <span class="text-sm text-gray-400">
                        {move || session.with(|s| match s.current_user() {
                            Some(user) => format!("Signed in as {}", user.name),
                            None => "Not signed in".to_string(),
                        })}
                    </span>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
