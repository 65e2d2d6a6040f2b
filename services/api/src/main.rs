use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

mod error;
mod fixtures;
mod models;
mod routes;
mod selector;
mod state;

use common::extractor::{ExtractorConfig, VideoExtractor};
use tokio::net::TcpListener;

use crate::{fixtures::FixtureCatalog, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting video API service");

    // Initialize the extraction engine client
    let extractor_config = ExtractorConfig::from_env()?;
    let extractor = VideoExtractor::new(extractor_config);

    // Engine absence is not fatal: the service keeps answering with
    // synthetic data until the engine is installed
    if extractor.health_check().await {
        info!("Extraction engine available");
    } else {
        warn!("Extraction engine not available, responses will be synthetic");
    }

    let app_state = AppState {
        extractor,
        fixtures: FixtureCatalog::new(),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Video API service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
