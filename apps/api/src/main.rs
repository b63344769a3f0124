mod catalog;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod style;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::products::Catalog;
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmConfig};
use crate::routes::build_router;
use crate::state::AppState;
use crate::style::classifier::GeminiVibeClassifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jewel API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(LlmConfig::from(&config))?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm.model(),
        config.classify_timeout_secs
    );

    let catalog = Catalog::builtin();
    info!("Catalog loaded with {} products", catalog.products().len());

    // Build app state
    let state = AppState {
        classifier: Arc::new(GeminiVibeClassifier::new(llm)),
        catalog: Arc::new(catalog),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser front end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
