//! HTTP Data Client
//!
//! Fetches the four page documents with reqwest. Each request stands on its
//! own: a failure is logged and leaves only that section empty.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{normalize_base, Endpoint};
use crate::model::{DashboardData, DescriptiveInfo, SeriesData, StatusData};

/// Errors from a single document fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, DNS failure, broken body stream...
    #[error("Network error on /{endpoint}: {source}")]
    Network {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Unexpected status {status} on /{endpoint}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Body was not the expected JSON document
    #[error("Invalid JSON on /{endpoint}: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => *endpoint,
        }
    }
}

/// Client for the HydroWatch data API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base: String,
}

impl ApiClient {
    /// Create a client for the given base address.
    ///
    /// No request timeout is configured; a hung request keeps its section
    /// in the loading state.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            client: Client::new(),
            api_base: normalize_base(&api_base).to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn fetch_info(&self) -> Result<DescriptiveInfo, FetchError> {
        self.get_json(Endpoint::Info).await
    }

    pub async fn fetch_energy(&self) -> Result<SeriesData, FetchError> {
        self.get_json(Endpoint::Energy).await
    }

    pub async fn fetch_quality(&self) -> Result<SeriesData, FetchError> {
        self.get_json(Endpoint::Quality).await
    }

    pub async fn fetch_status(&self) -> Result<StatusData, FetchError> {
        self.get_json(Endpoint::Status).await
    }

    /// Issue all four requests concurrently.
    ///
    /// Never fails as a whole: every failed category is logged and left as
    /// `None` in the result.
    pub async fn load_dashboard(&self) -> DashboardData {
        let (info, energy, quality, status) = tokio::join!(
            self.fetch_info(),
            self.fetch_energy(),
            self.fetch_quality(),
            self.fetch_status(),
        );

        let data = DashboardData {
            info: keep_or_log(info),
            energy: keep_or_log(energy),
            quality: keep_or_log(quality),
            status: keep_or_log(status),
        };

        tracing::info!(
            api_base = %self.api_base,
            loaded = data.loaded_count(),
            "Dashboard data loaded"
        );

        data
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = endpoint.url(&self.api_base);
        tracing::debug!(%url, "Fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network { endpoint, source })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

fn keep_or_log<T>(result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(endpoint = %e.endpoint(), error = %e, "Failed to fetch section");
            None
        }
    }
}
