//! Data Loader
//!
//! The page needs four independent documents. This module names them and
//! builds their URLs; the native HTTP client lives in [`client`], the
//! browser build fetches with `gloo-net` using the same [`Endpoint`]s.

#[cfg(feature = "native")]
pub mod client;

#[cfg(feature = "native")]
pub use client::{ApiClient, FetchError};

use std::fmt;

/// Default API base address
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// One fetchable data category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Info,
    Energy,
    Quality,
    Status,
}

impl Endpoint {
    /// All categories, in page order
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Info,
        Endpoint::Energy,
        Endpoint::Quality,
        Endpoint::Status,
    ];

    /// Path segment below the API base
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Info => "info",
            Endpoint::Energy => "energy",
            Endpoint::Quality => "quality",
            Endpoint::Status => "status",
        }
    }

    /// Full URL for this endpoint under `api_base`
    pub fn url(&self, api_base: &str) -> String {
        format!("{}/{}", normalize_base(api_base), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Strip trailing slashes so joined URLs never contain `//`
pub fn normalize_base(api_base: &str) -> &str {
    api_base.trim_end_matches('/')
}
