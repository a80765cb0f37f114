//! HTTP implementation of the conversion gateway.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use docmark_core::models::{ConversionResult, UploadEntry};

use crate::{GatewayError, MarkdownGateway};

/// HTTP gateway configuration
#[derive(Clone)]
pub struct HttpMarkdownGatewayConfig {
    /// Full URL of the conversion endpoint.
    pub endpoint: String,
    /// Bearer token for the conversion service.
    pub api_token: String,
    /// Per-request timeout; a timeout surfaces as a transport error.
    pub timeout: Duration,
}

/// Gateway implementation posting upload batches to the conversion service
/// as multipart form data and decoding its JSON result envelope.
pub struct HttpMarkdownGateway {
    http_client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl Debug for HttpMarkdownGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        // The bearer token stays out of Debug output.
        f.debug_struct("HttpMarkdownGateway")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

// Service response envelope: one result per accepted input, or
// success=false with a list of error messages.
#[derive(Debug, Deserialize)]
struct ConversionEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    result: Vec<ConversionResult>,
    #[serde(default)]
    errors: Vec<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: i64,
    message: String,
}

impl HttpMarkdownGateway {
    pub fn new(config: HttpMarkdownGatewayConfig) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint,
            api_token: config.api_token,
        })
    }

    fn build_form(entries: &[UploadEntry]) -> Result<reqwest::multipart::Form, GatewayError> {
        let mut form = reqwest::multipart::Form::new();
        for entry in entries {
            let part = reqwest::multipart::Part::bytes(entry.data.clone())
                .file_name(entry.name.clone())
                .mime_str(&entry.media_type)
                .map_err(|e| {
                    GatewayError::Request(format!(
                        "invalid media type '{}' for '{}': {}",
                        entry.media_type, entry.name, e
                    ))
                })?;
            form = form.part("files", part);
        }
        Ok(form)
    }

    fn decode_envelope(
        status: u16,
        envelope: ConversionEnvelope,
    ) -> Result<Vec<ConversionResult>, GatewayError> {
        if !envelope.success {
            let detail = if envelope.errors.is_empty() {
                "service reported failure without detail".to_string()
            } else {
                envelope
                    .errors
                    .iter()
                    .map(|e| format!("{} ({})", e.message, e.code))
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            return Err(GatewayError::Service { status, detail });
        }
        Ok(envelope.result)
    }
}

#[async_trait]
impl MarkdownGateway for HttpMarkdownGateway {
    async fn to_markdown(
        &self,
        entries: &[UploadEntry],
    ) -> Result<Vec<ConversionResult>, GatewayError> {
        let form = Self::build_form(entries)?;

        tracing::debug!(
            file_count = entries.len(),
            endpoint = %self.endpoint,
            "Submitting batch to conversion service"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        let envelope: ConversionEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let results = Self::decode_envelope(status.as_u16(), envelope)?;

        tracing::debug!(
            result_count = results.len(),
            "Conversion service returned batch"
        );

        Ok(results)
    }
}
