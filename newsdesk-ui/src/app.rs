//! App Root Component
//!
//! Router shell: owns the session slot, renders navigation and registers a
//! route for every configured path.

use leptos::*;
use leptos_router::*;
use newsdesk::{AppRoute, Config, Session};

use crate::components::Nav;
use crate::pages::{Login, News, Preferences};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_global_state(config);

    // The only shared state: absent until the login view fills it
    let (session, set_session) = create_signal(Session::new());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav session=session />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <RouteOutlet session=session set_session=set_session />
                </main>
            </div>
        </Router>
    }
}

/// `<Routes>` built from the route table.
///
/// There is no fallback route: an unknown path renders nothing. Views are
/// not gated on the session.
#[component]
fn RouteOutlet(session: ReadSignal<Session>, set_session: WriteSignal<Session>) -> impl IntoView {
    let state = use_global_state();

    // Login aliases make the number of routes config-dependent
    let definitions: Vec<View> = state.routes.with_value(|table| {
        table
            .entries()
            .map(|(path, route)| route_definition(path.to_string(), route, session, set_session))
            .collect()
    });

    Routes(
        RoutesProps::builder()
            .children(ToChildren::to_children(move || Fragment::new(definitions)))
            .build(),
    )
}

fn route_definition(
    path: String,
    route: AppRoute,
    session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
) -> View {
    match route {
        AppRoute::Login => view! {
            <Route path=path view=move || view! { <Login set_session=set_session /> } />
        }
        .into_view(),
        AppRoute::News => view! {
            <Route path=path view=move || view! { <News session=session /> } />
        }
        .into_view(),
        AppRoute::Preferences => view! {
            <Route path=path view=move || view! { <Preferences session=session /> } />
        }
        .into_view(),
    }
}
