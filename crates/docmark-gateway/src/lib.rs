//! Boundary to the external document-to-Markdown conversion capability.
//!
//! The pipeline only ever talks to the `MarkdownGateway` trait; the real
//! HTTP implementation lives in [`http`], and tests substitute stubs.

mod http;

pub use http::{HttpMarkdownGateway, HttpMarkdownGatewayConfig};

use async_trait::async_trait;
use docmark_core::models::{ConversionResult, UploadEntry};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Connection, TLS, or timeout failure before a response was decoded.
    #[error("conversion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but not with a usable result set.
    #[error("conversion service returned status {status}: {detail}")]
    Service { status: u16, detail: String },

    /// A batch that could not be encoded into a request.
    #[error("could not encode conversion request: {0}")]
    Request(String),

    #[error("conversion service returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// External conversion capability: one result per submitted entry, or a
/// single failure for the whole batch. Implementations do not retry.
#[async_trait]
pub trait MarkdownGateway: Send + Sync {
    async fn to_markdown(
        &self,
        entries: &[UploadEntry],
    ) -> Result<Vec<ConversionResult>, GatewayError>;
}
