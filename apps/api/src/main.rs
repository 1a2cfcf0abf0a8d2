mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.api_url.clone(), config.api_key.clone());
    if llm.is_mock() {
        warn!("No provider API key configured. Generation will return built prompts (mock mode).");
    } else {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    }

    let state = AppState { llm };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
