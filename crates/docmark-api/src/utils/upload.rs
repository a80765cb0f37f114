//! Multipart extraction for the convert endpoint.

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use docmark_core::models::UploadEntry;
use docmark_core::AppError;

/// Extract every file-bearing field from a multipart form, in body order.
///
/// A field counts as a file when it declares a filename; plain text fields
/// are skipped, not errors. A blank declared filename falls back to a
/// generated `file-{index}` placeholder. Zero files is a valid empty return;
/// the caller decides whether that is an error. The body is consumed here
/// and cannot be re-read.
pub async fn extract_upload_entries(
    mut multipart: Multipart,
) -> Result<Vec<UploadEntry>, AppError> {
    let mut entries = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_read_error)? {
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let media_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field.bytes().await.map_err(multipart_read_error)?;

        // Browsers may send an empty filename for an empty file input.
        let name = if file_name.trim().is_empty() {
            format!("file-{}", entries.len())
        } else {
            file_name
        };

        entries.push(UploadEntry {
            name,
            media_type,
            data: data.to_vec(),
        });
    }

    Ok(entries)
}

/// The body-size limit surfaces as a 413 mid-stream; everything else that
/// fails while decoding the form is a malformed request.
fn multipart_read_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("File exceeds the maximum allowed upload size".to_string())
    } else {
        AppError::MalformedRequest(format!("Failed to read multipart body: {}", err))
    }
}
