use anyhow::{Context, Result};
use dotenvy::dotenv;

pub mod ai;
pub mod api;
pub mod compiler;
pub mod config;
pub mod labels;
pub mod messages;
pub mod options;
pub mod randomizer;
pub mod selection;
pub mod session;
pub mod target;

pub use api::router as api_router;
pub use compiler::compile;
pub use config::Config;
pub use labels::{clean_label, extract_aspect_ratio, extract_number, is_reference_value};
pub use options::{Field, OptionList, REFERENCE_SENTINEL};
pub use randomizer::randomize;
pub use selection::{Choice, Selections, Value};
pub use session::{AppMode, Session};
pub use target::{MediaType, Target, TargetModel};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting prompt proxy...");

    let config = Config::from_env();
    if config.ai.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; prompt requests will fail with 500");
    }

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, api_router(config.ai))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for ctrl-c");
    }
}
