//! State Management
//!
//! Page state signals and theme persistence.

pub mod global;
pub mod theme;

pub use global::{provide_global_state, GlobalState};
