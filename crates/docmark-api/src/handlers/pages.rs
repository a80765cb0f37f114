//! Presentational pages and fixed static assets.
//!
//! The assets are compiled into the binary and versioned via
//! `constants::ASSET_VERSION`; per-request data never flows through them.

use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::render;

const COPY_JS: &str = include_str!("../../assets/copy.js");
const STYLE_CSS: &str = include_str!("../../assets/style.css");

const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Home page with the upload form.
pub async fn home() -> Html<String> {
    Html(render::upload_page())
}

/// Copy-button wiring for the results page.
pub async fn copy_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        COPY_JS,
    )
}

pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css"),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        STYLE_CSS,
    )
}
