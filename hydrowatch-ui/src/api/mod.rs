//! Data API access

pub mod client;

pub use client::{fetch_energy, fetch_info, fetch_quality, fetch_status, get_api_base};
