mod analysis;
mod config;
mod errors;
mod extract;
mod matcher;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::cache::ExtractionCache;
use crate::matcher::{HashingScorer, SimilarityScorer, N_FEATURES};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResuMatch API v{}", env!("CARGO_PKG_VERSION"));

    // The hasher is parameter-free, so one shared instance serves every
    // request. Construction is the expensive part; transforms are cheap.
    let scorer: Arc<dyn SimilarityScorer> = Arc::new(HashingScorer::new());
    info!("Hashing scorer initialized ({} features)", N_FEATURES);

    let extraction_cache = Arc::new(ExtractionCache::new());

    let state = AppState {
        config: config.clone(),
        scorer,
        extraction_cache,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
