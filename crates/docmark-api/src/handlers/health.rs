//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn test() -> Json<Value> {
    Json(json!({ "message": "Test endpoint is working!" }))
}
