//! Error types module
//!
//! This module provides the core error types used throughout the docmark
//! application. All request-pipeline failures are unified under the
//! `AppError` enum; each variant carries its HTTP presentation via the
//! `ErrorMetadata` trait.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NO_FILES_UPLOADED")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Content-Type must be multipart/form-data")]
    UnsupportedContentType,

    #[error("Malformed multipart request: {0}")]
    MalformedRequest(String),

    #[error("No files uploaded")]
    NoFilesUploaded,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Conversion service error: {0}")]
    ConversionService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
/// Reduces duplication in ErrorMetadata impl; client_message stays per-variant for dynamic content.
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::UnsupportedContentType => (
            400,
            "UNSUPPORTED_CONTENT_TYPE",
            false,
            Some("Resend the request as multipart/form-data"),
            false,
            LogLevel::Debug,
        ),
        AppError::MalformedRequest(_) => (
            400,
            "MALFORMED_REQUEST",
            false,
            Some("Check the multipart encoding of the request body"),
            false,
            LogLevel::Debug,
        ),
        AppError::NoFilesUploaded => (
            400,
            "NO_FILES_UPLOADED",
            false,
            Some("Attach at least one file field to the form"),
            false,
            LogLevel::Debug,
        ),
        AppError::UnsupportedFileType(_) => (
            400,
            "UNSUPPORTED_FILE_TYPE",
            false,
            Some("Remove unsupported files and resend the batch"),
            false,
            LogLevel::Debug,
        ),
        AppError::PayloadTooLarge(_) => (
            413,
            "PAYLOAD_TOO_LARGE",
            false,
            Some("Reduce file size and try again"),
            false,
            LogLevel::Debug,
        ),
        AppError::ConversionService(_) => (
            500,
            "CONVERSION_SERVICE_ERROR",
            true,
            Some("Retry the whole request after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::Internal(_) => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::UnsupportedContentType => "UnsupportedContentType",
            AppError::MalformedRequest(_) => "MalformedRequest",
            AppError::NoFilesUploaded => "NoFilesUploaded",
            AppError::UnsupportedFileType(_) => "UnsupportedFileType",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::ConversionService(_) => "ConversionService",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            AppError::UnsupportedContentType => {
                "Content-Type must be multipart/form-data".to_string()
            }
            AppError::MalformedRequest(ref msg) => msg.clone(),
            AppError::NoFilesUploaded => "No files uploaded".to_string(),
            AppError::UnsupportedFileType(ref media_type) => {
                format!("Unsupported file type: {}", media_type)
            }
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            // Gateway diagnostics are logged server-side, never echoed to the client.
            AppError::ConversionService(_) => "Document conversion failed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_unsupported_content_type() {
        let err = AppError::UnsupportedContentType;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "UNSUPPORTED_CONTENT_TYPE");
        assert!(!err.is_recoverable());
        assert_eq!(
            err.client_message(),
            "Content-Type must be multipart/form-data"
        );
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_unsupported_file_type() {
        let err = AppError::UnsupportedFileType("application/zip".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "UNSUPPORTED_FILE_TYPE");
        assert!(err.client_message().contains("application/zip"));
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_no_files_uploaded() {
        let err = AppError::NoFilesUploaded;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "NO_FILES_UPLOADED");
        assert_eq!(err.client_message(), "No files uploaded");
    }

    #[test]
    fn test_error_metadata_conversion_service_is_opaque() {
        let err = AppError::ConversionService("connection refused to 10.0.0.7:443".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "CONVERSION_SERVICE_ERROR");
        assert!(err.is_recoverable());
        assert!(err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Error);
        // Internal detail must never leak through the client message
        assert_eq!(err.client_message(), "Document conversion failed");
        assert!(!err.client_message().contains("10.0.0.7"));
    }

    #[test]
    fn test_error_metadata_suggested_actions() {
        let err = AppError::ConversionService("boom".to_string());
        assert_eq!(
            err.suggested_action(),
            Some("Retry the whole request after a short delay")
        );

        let err = AppError::NoFilesUploaded;
        assert_eq!(
            err.suggested_action(),
            Some("Attach at least one file field to the form")
        );
    }
}
