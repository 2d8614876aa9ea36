mod config;
mod errors;
mod generation;
mod llm_client;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::PdfLatexCompiler;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV generator API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. A missing key is reported per request, not here.
    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    if llm.has_api_key() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GEMINI_API_KEY is not set; generation endpoints will fail until it is");
    }

    // Initialize LaTeX compiler. Probed once for the log; every compile re-probes.
    let compiler = PdfLatexCompiler::new(config.latex_compiler.clone(), config.latex_timeout);
    match compiler.probe().await {
        Ok(path) => info!("LaTeX compiler: {}", path.display()),
        Err(e) => warn!("{e}; CVs will be returned as LaTeX source"),
    }
    match &config.cv_template_path {
        Some(path) => info!("CV template: {}", path.display()),
        None => info!("CV template: bundled"),
    }

    let state = AppState {
        llm: Arc::new(llm),
        compiler: Arc::new(compiler),
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
