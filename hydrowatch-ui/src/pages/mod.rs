//! Pages
//!
//! Top-level page content.

pub mod home;

pub use home::Home;
