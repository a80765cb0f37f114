use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One file extracted from a multipart request.
///
/// Immutable once created; owned by the pipeline invocation that created it.
#[derive(Debug, Clone)]
pub struct UploadEntry {
    /// Original filename from the form field (or a generated placeholder).
    pub name: String,
    /// Media type declared by the client for this part.
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Per-file outcome returned by the conversion service.
///
/// Field names follow the service's wire contract and are serialized to
/// clients verbatim; `data` is the Markdown text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub name: String,
    pub mime_type: String,
    pub tokens: u64,
    pub data: String,
}
