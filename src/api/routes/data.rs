//! Data Routes
//!
//! The four documents the page loads:
//!
//! - GET /api/info - Marketing copy
//! - GET /api/energy - Monthly energy consumption
//! - GET /api/quality - Water quality readings
//! - GET /api/status - Plant unit status breakdown

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::model::{DescriptiveInfo, SeriesData, StatusData};

/// GET /api/info
pub async fn info(State(state): State<Arc<AppState>>) -> Json<DescriptiveInfo> {
    Json(state.content.info.clone())
}

/// GET /api/energy
pub async fn energy(State(state): State<Arc<AppState>>) -> Json<SeriesData> {
    Json(state.content.energy.clone())
}

/// GET /api/quality
pub async fn quality(State(state): State<Arc<AppState>>) -> Json<SeriesData> {
    Json(state.content.quality.clone())
}

/// GET /api/status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusData> {
    Json(state.content.status.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::demo::DemoContent;

    #[tokio::test]
    async fn test_handlers_serve_content() {
        let state = Arc::new(AppState::new(DemoContent::default()));

        let Json(energy) = energy(State(Arc::clone(&state))).await;
        assert_eq!(energy.unit.as_deref(), Some("kWh"));
        assert_eq!(energy.labels.len(), energy.data.len());

        let Json(status) = status(State(state)).await;
        assert_eq!(status.total(), 22.0);
    }
}
