//! Conversion pipeline: extract → validate → convert.

use std::sync::Arc;

use axum::extract::Multipart;
use docmark_core::models::{ConversionResult, UploadEntry};
use docmark_core::AppError;

use crate::state::AppState;
use crate::utils::upload::extract_upload_entries;

/// Orchestrates one request's path from multipart body to conversion
/// results. All state is request-scoped; the only suspension point is the
/// gateway call.
pub struct ConvertService {
    state: Arc<AppState>,
}

impl ConvertService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Run the full pipeline. Every failure is terminal for the request;
    /// validation failures are reported before the gateway is ever invoked.
    pub async fn convert_batch(
        &self,
        multipart: Multipart,
    ) -> Result<Vec<ConversionResult>, AppError> {
        let entries = extract_upload_entries(multipart).await?;
        let batch = self.validate_batch(entries)?;
        self.convert(batch).await
    }

    /// Strict-batch validation: the first rejected media type aborts the
    /// whole request. Entries keep extraction order; duplicate names stay
    /// distinct.
    fn validate_batch(&self, entries: Vec<UploadEntry>) -> Result<Vec<UploadEntry>, AppError> {
        for entry in &entries {
            if !self.state.policy.is_accepted(&entry.media_type) {
                tracing::debug!(
                    file = %entry.name,
                    media_type = %entry.media_type,
                    "Rejected unsupported file type"
                );
                return Err(AppError::UnsupportedFileType(entry.media_type.clone()));
            }
        }

        if entries.is_empty() {
            return Err(AppError::NoFilesUploaded);
        }

        Ok(entries)
    }

    /// Submit the validated batch. The gateway call is atomic: results for
    /// every entry, or one opaque failure with the diagnostic detail kept
    /// in the server log.
    async fn convert(&self, batch: Vec<UploadEntry>) -> Result<Vec<ConversionResult>, AppError> {
        tracing::info!(file_count = batch.len(), "Submitting batch to conversion gateway");

        let results = self
            .state
            .gateway
            .to_markdown(&batch)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    file_count = batch.len(),
                    "Conversion gateway call failed"
                );
                AppError::ConversionService(e.to_string())
            })?;

        tracing::info!(result_count = results.len(), "Conversion batch completed");

        Ok(results)
    }
}
