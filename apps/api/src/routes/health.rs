use axum::{response::Html, Json};
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cvgen-api"
    }))
}

/// GET /test
pub async fn smoke_handler() -> Html<&'static str> {
    Html("<h1>Server is working!</h1>")
}
