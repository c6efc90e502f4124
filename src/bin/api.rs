//! HydroWatch Demo API Server
//!
//! Run with: cargo run --bin hydrowatch-api
//!
//! # Configuration
//!
//! Read from `hydrowatch.toml` (see `hydrowatch config`) with environment
//! overrides:
//! - `HYDROWATCH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HYDROWATCH_PORT`: Port to listen on (default: 8000)
//! - `HYDROWATCH_CONTENT_FILE`: JSON file replacing the built-in content
//! - `RUST_LOG`: Log filter (default: hydrowatch=info)

use std::path::Path;

use hydrowatch::api::{serve, AppState, DemoContent};
use hydrowatch::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    config.logging.init();

    tracing::info!("Starting HydroWatch demo API v{}", env!("CARGO_PKG_VERSION"));

    let content = match &config.server.content_file {
        Some(path) => {
            tracing::info!("Loading content from {}", path);
            DemoContent::load(Path::new(path))?
        }
        None => DemoContent::default(),
    };

    serve(AppState::new(content), &config.server).await?;

    tracing::info!("HydroWatch demo API stopped");
    Ok(())
}
