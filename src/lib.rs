//! # HydroWatch
//!
//! Showcase site and demo dashboard for a water-treatment monitoring
//! product.
//!
//! ## Modules
//!
//! - [`model`]: JSON documents served by the backend
//! - [`loader`]: endpoint naming and (native) HTTP data client
//! - [`chart`]: chart configurations and the lazy chart renderer
//! - [`theme`]: light/dark preference and its storage
//! - [`config`]: TOML + environment configuration (native)
//! - [`api`]: demo data server built with Axum (native)
//!
//! Without the default `native` feature only the platform independent parts
//! are compiled, which is what the browser crate uses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hydrowatch::loader::ApiClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::new("http://localhost:8000/api");
//!     let data = client.load_dashboard().await;
//!     println!("{} of 4 sections loaded", data.loaded_count());
//! }
//! ```

pub mod chart;
pub mod loader;
pub mod model;
pub mod theme;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use chart::{
    ChartConfig, ChartError, ChartInstance, ChartKind, ChartSlotId, ChartSurface,
    LazyChartRenderer, SlotState, VisibilityObserver, VISIBILITY_THRESHOLD,
};

pub use loader::{Endpoint, DEFAULT_API_BASE};

pub use model::{DashboardData, DescriptiveInfo, Problem, SeriesData, Solution, StatusData};

pub use theme::{ThemeError, ThemePreference, ThemeStore};

#[cfg(feature = "native")]
pub use loader::{ApiClient, FetchError};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
