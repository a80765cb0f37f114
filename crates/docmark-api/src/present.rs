//! Maps a pipeline outcome into its negotiated response representation.

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use docmark_core::models::ConversionResult;
use docmark_core::{AppError, ErrorMetadata};

use crate::error::{log_error, HttpAppError};
use crate::render;

/// Response representation for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Json,
    Html,
}

/// Browsers submitting the upload form ask for text/html; API clients get
/// JSON by default.
pub fn negotiate(headers: &HeaderMap) -> ResponseMode {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if accept.contains("text/html") {
        ResponseMode::Html
    } else {
        ResponseMode::Json
    }
}

/// Render the single outcome of a pipeline invocation. Deterministic for a
/// given outcome and mode; both representations of a failure carry the same
/// status code.
pub fn respond(outcome: Result<Vec<ConversionResult>, AppError>, mode: ResponseMode) -> Response {
    match (outcome, mode) {
        (Ok(results), ResponseMode::Json) => (StatusCode::OK, Json(results)).into_response(),
        (Ok(results), ResponseMode::Html) => {
            (StatusCode::OK, Html(render::results_page(&results))).into_response()
        }
        (Err(error), ResponseMode::Json) => HttpAppError(error).into_response(),
        (Err(error), ResponseMode::Html) => {
            log_error(&error);
            let status = StatusCode::from_u16(error.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Html(render::error_page(&error.client_message()))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_negotiate_defaults_to_json() {
        assert_eq!(negotiate(&HeaderMap::new()), ResponseMode::Json);

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        assert_eq!(negotiate(&headers), ResponseMode::Json);
    }

    #[test]
    fn test_negotiate_picks_html_for_browsers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        assert_eq!(negotiate(&headers), ResponseMode::Html);
    }

    #[test]
    fn test_respond_statuses_match_across_modes() {
        let json = respond(Err(AppError::NoFilesUploaded), ResponseMode::Json);
        let html = respond(Err(AppError::NoFilesUploaded), ResponseMode::Html);
        assert_eq!(json.status(), StatusCode::BAD_REQUEST);
        assert_eq!(html.status(), json.status());

        let json = respond(
            Err(AppError::ConversionService("boom".into())),
            ResponseMode::Json,
        );
        assert_eq!(json.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
