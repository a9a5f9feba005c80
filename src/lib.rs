//! # Newsdesk
//!
//! Core of the Newsdesk news reader: the session slot, the topic preferences
//! form model and the client-side route table. The Leptos frontend in
//! `newsdesk-ui` renders these; nothing here touches the DOM, so the crate
//! builds and tests natively as well as for `wasm32-unknown-unknown`.
//!
//! ## Modules
//!
//! - [`session`]: the signed-in user slot and the placeholder login
//! - [`preferences`]: topic catalog, checked-topic set and submission
//! - [`routes`]: paths registered with the router and the view for each
//! - [`news`]: text of the news view
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use newsdesk::*;
//!
//! let config = Config::default();
//! let table = config.routes.to_table();
//! assert_eq!(table.path_for(AppRoute::Preferences), Some("/preferences"));
//!
//! let mut session = Session::new();
//! session.sign_in(User::placeholder(&config.session.placeholder_name));
//!
//! let mut selection = PreferenceSelection::new();
//! selection.set("technology", true);
//! selection.set("health", true);
//! selection.set("technology", false);
//!
//! let payload = preferences::submit(session.current_user(), &selection);
//! assert_eq!(payload.preferences, vec!["health"]);
//! ```

pub mod config;
pub mod news;
pub mod preferences;
pub mod routes;
pub mod session;

pub use config::{
    generate_default_config, Config, ConfigError, LoggingConfig, RoutesConfig, SessionConfig,
};
pub use preferences::{PreferenceSelection, PreferencesPayload, Topic, TopicCatalog};
pub use routes::{AppRoute, RouteTable};
pub use session::{Session, User};
