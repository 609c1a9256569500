mod config;
mod dashboard;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod scheduler;
mod seo;
mod state;
mod storage;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scheduler::spawn_scheduler;
use crate::state::AppState;
use crate::storage::PostStore;

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

    info!("Starting blog API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = Arc::new(LlmClient::new(
        config.openai_api_url.clone(),
        config.openai_api_key.clone(),
    )?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let store = PostStore::new(&config.posts_dir, &config.html_dir);
    info!(
        "Posts stored in {} (HTML in {})",
        store.posts_dir().display(),
        store.html_dir().display()
    );

    let state = AppState {
        llm,
        store: store.clone(),
    };

    if config.scheduler.enabled {
        info!(
            "Scheduling generation for '{}' every {}s",
            config.scheduler.keyword, config.scheduler.interval_secs
        );
        spawn_scheduler(
            state.llm.clone(),
            store,
            config.scheduler.keyword.clone(),
            Duration::from_secs(config.scheduler.interval_secs),
        );
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
