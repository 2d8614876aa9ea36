pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::landing_page))
        .route("/create", get(pages::create_page))
        .route("/test", get(health::smoke_handler))
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/generate-summary",
            post(handlers::handle_generate_summary),
        )
        .route("/api/generate-cv", post(handlers::handle_generate_cv))
        .with_state(state)
}
