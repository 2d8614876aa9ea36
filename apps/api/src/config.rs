use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is optional: a missing key is reported
/// when a generation endpoint is called, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Template read from disk on each request. The bundled template is used when unset.
    pub cv_template_path: Option<PathBuf>,
    /// Explicit compiler executable. Falls back to a `PATH` search when unset.
    pub latex_compiler: Option<PathBuf>,
    pub latex_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cv_template_path: optional_env("CV_TEMPLATE_PATH").map(PathBuf::from),
            latex_compiler: optional_env("LATEX_COMPILER").map(PathBuf::from),
            latex_timeout: Duration::from_secs(
                std::env::var("LATEX_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse::<u64>()
                    .context("LATEX_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
