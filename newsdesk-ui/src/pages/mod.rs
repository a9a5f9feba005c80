//! Pages
//!
//! Top-level page components for each route.

pub mod login;
pub mod news;
pub mod preferences;

pub use login::Login;
pub use news::News;
pub use preferences::Preferences;
