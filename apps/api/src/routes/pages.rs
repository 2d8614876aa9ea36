//! Static HTML pages. The markup lives under `static/` and is compiled in.

use axum::response::Html;

const LANDING_HTML: &str = include_str!("../../static/landing.html");
const CREATE_HTML: &str = include_str!("../../static/create.html");

/// GET /
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_HTML)
}

/// GET /create
pub async fn create_page() -> Html<&'static str> {
    Html(CREATE_HTML)
}
