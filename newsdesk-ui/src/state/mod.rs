//! State Management
//!
//! Context shared by every component.

pub mod global;

pub use global::{provide_global_state, use_global_state};
