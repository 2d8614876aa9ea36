use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::render::DocumentCompiler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; swapped for fakes in handler tests.
    pub llm: Arc<dyn TextGenerator>,
    /// pdflatex in production. Compile failures never fail a request.
    pub compiler: Arc<dyn DocumentCompiler>,
    pub config: Config,
}
