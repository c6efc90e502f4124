//! HydroWatch Demo Data Server
//!
//! Local stand-in for the data backend, built with Axum. Serves the four
//! fixed-shape documents the page loads so the site and CLI can run
//! end to end.
//!
//! # Endpoints
//!
//! ## Data
//! - `GET /api/info` - Marketing copy
//! - `GET /api/energy` - Energy consumption series
//! - `GET /api/quality` - Water quality series
//! - `GET /api/status` - Plant status breakdown
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status, uptime and version
//!
//! # Example
//!
//! ```rust,ignore
//! use hydrowatch::api::{serve, AppState, DemoContent};
//! use hydrowatch::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(AppState::new(DemoContent::default()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod demo;
pub mod error;
pub mod routes;
pub mod state;

pub use demo::DemoContent;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Data routes, relative to the API base
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/info", get(routes::data::info))
        .route("/energy", get(routes::data::energy))
        .route("/quality", get(routes::data::quality))
        .route("/status", get(routes::data::status))
}

/// Data routes with their own state, ready to nest anywhere
pub fn data_routes(content: DemoContent) -> Router {
    api_routes().with_state(Arc::new(AppState::new(content)))
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes())
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(shared_state)
}

/// The page is served from another origin than the data
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET])
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state, config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HydroWatch demo API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("HydroWatch demo API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(DemoContent::default()), &ServerConfig::default())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get_json(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_info_shape() {
        let (status, body) = get_json(create_test_app(), "/api/info").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["context"].is_string());
        assert!(body["problem"]["owners"].is_string());
        assert!(body["problem"]["vendors"].is_string());
        assert!(body["solution"]["modules"].is_string());
        assert!(body["solution"]["ai"].is_string());
        assert!(body["solution"]["dashboard"].is_string());
        assert!(body["business_model"].is_string());
    }

    #[tokio::test]
    async fn test_series_shapes() {
        for uri in ["/api/energy", "/api/quality"] {
            let (status, body) = get_json(create_test_app(), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body["labels"].is_array());
            assert!(body["data"].is_array());
            assert!(body["unit"].is_string());
        }

        let (status, body) = get_json(create_test_app(), "/api/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labels"].as_array().unwrap().len(), 3);
        assert!(body.get("unit").is_none());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(create_test_app(), "/api/pressure").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Builds without panicking for a mix of valid and invalid origins
        let _ = cors_layer(&["http://localhost:8080".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }
}
