//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;

pub use nav::Nav;
