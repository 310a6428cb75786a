mod config;
mod db;
mod errors;
mod inference;
mod llm_client;
mod models;
mod retrieval;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_lazy_pool;
use crate::llm_client::LlmClient;
use crate::retrieval::pgvector::PgVectorStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting experience-tagger v{}", env!("CARGO_PKG_VERSION"));

    // One OpenAI client for generation and embeddings; its HTTP client is
    // created on first use.
    let llm = Arc::new(LlmClient::new(&config));
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; inference requests will fail until it is");
    }
    info!("LLM client configured (model: {})", llm.model());

    // Vector store over a lazily-connecting pool
    let pool = create_lazy_pool(&config.database_url)?;
    let store = Arc::new(PgVectorStore::new(pool, llm.clone()));

    let state = AppState {
        store,
        generator: llm,
        config: config.clone(),
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
