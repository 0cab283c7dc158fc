mod analysis;
mod config;
mod errors;
mod llm_client;
mod ocr;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GenerationParams, LlmClient};
use crate::ocr::OcrClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sustainify API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.http_timeout_secs);

    // Initialize OCR client
    let ocr = OcrClient::new(
        config.ocr_api_url.clone(),
        config.ocr_api_key.clone(),
        config.ocr_language.clone(),
        timeout,
    )?;
    info!("OCR client initialized (language: {})", config.ocr_language);

    // Initialize LLM client
    let llm = LlmClient::new(
        config.inference_api_url.clone(),
        config.hf_api_token.clone(),
        timeout,
    )?;
    info!("LLM client initialized (model: {})", config.inference_model);

    let state = AppState {
        ocr: Arc::new(ocr),
        llm: Arc::new(llm),
        generation: GenerationParams {
            model: config.inference_model.clone(),
            max_tokens: config.inference_max_tokens,
            temperature: config.inference_temperature,
        },
    };

    let app = build_router(state, config.max_upload_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
