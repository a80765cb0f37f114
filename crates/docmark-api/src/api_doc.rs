//! OpenAPI documentation served at /api/openapi.json and browsed at /docs.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use docmark_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docmark API",
        version = "0.1.0",
        description = "Document to Markdown conversion API. Upload one or more files as multipart/form-data to /convert and receive per-file Markdown, either as JSON or as a rendered results page depending on the Accept header."
    ),
    paths(handlers::convert::convert, handlers::health::test),
    components(schemas(models::ConversionResult, error::ErrorResponse)),
    tags(
        (name = "convert", description = "Document conversion"),
        (name = "health", description = "Liveness probes")
    )
)]
pub struct ApiDoc;
