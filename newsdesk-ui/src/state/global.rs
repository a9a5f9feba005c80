//! Global Application State
//!
//! Configuration and the route table, provided through Leptos context. The
//! session slot is not here: the shell owns it and hands a reader or a
//! setter to each view.

use leptos::*;
use newsdesk::{Config, RouteTable};

/// Read-only state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    pub config: StoredValue<Config>,
    pub routes: StoredValue<RouteTable>,
}

/// Provide global state to the component tree
pub fn provide_global_state(config: Config) {
    let routes = config.routes.to_table();
    provide_context(GlobalState {
        config: store_value(config),
        routes: store_value(routes),
    });
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}
