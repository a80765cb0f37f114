//! POST /convert: the upload, validate, convert pipeline endpoint.

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::response::Response;
use tracing::Instrument;

use docmark_core::models::ConversionResult;
use docmark_core::AppError;

use crate::error::ErrorResponse;
use crate::present;
use crate::services::convert::ConvertService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/convert",
    tag = "convert",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Converted documents", body = Vec<ConversionResult>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Conversion service failure", body = ErrorResponse)
    )
)]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mode = present::negotiate(&headers);
    let span = tracing::info_span!("convert", request_id = %uuid::Uuid::new_v4());

    let outcome = async {
        // The extractor rejects before the body is read when the declared
        // content type is not multipart.
        let multipart = multipart.map_err(|rejection| {
            tracing::debug!(rejection = %rejection.body_text(), "Rejected non-multipart request");
            AppError::UnsupportedContentType
        })?;

        ConvertService::new(&state).convert_batch(multipart).await
    }
    .instrument(span)
    .await;

    present::respond(outcome, mode)
}
