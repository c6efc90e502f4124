//! UI Components
//!
//! Leptos components and browser bindings for the page.

pub mod canvas;
pub mod charts;
pub mod contact;
pub mod info;
pub mod loading;
pub mod nav;
pub mod viewport;

pub use charts::ChartsSection;
pub use contact::ContactPanel;
pub use info::InfoSections;
pub use loading::Loading;
pub use nav::Nav;
