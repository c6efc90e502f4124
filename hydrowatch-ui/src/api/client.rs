//! HTTP API Client
//!
//! One GET per page section against the data API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use hydrowatch::model::{DescriptiveInfo, SeriesData, StatusData};
use hydrowatch::{Endpoint, DEFAULT_API_BASE};

/// API base URL, fixed at build time through `HYDROWATCH_API_BASE`
pub fn get_api_base() -> &'static str {
    option_env!("HYDROWATCH_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

pub async fn fetch_info() -> Result<DescriptiveInfo, String> {
    fetch_json(Endpoint::Info).await
}

pub async fn fetch_energy() -> Result<SeriesData, String> {
    fetch_json(Endpoint::Energy).await
}

pub async fn fetch_quality() -> Result<SeriesData, String> {
    fetch_json(Endpoint::Quality).await
}

pub async fn fetch_status() -> Result<StatusData, String> {
    fetch_json(Endpoint::Status).await
}

async fn fetch_json<T: DeserializeOwned>(endpoint: Endpoint) -> Result<T, String> {
    let url = endpoint.url(get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), url));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
