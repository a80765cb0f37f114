//! Supported-format policy for uploaded documents.
//!
//! The accepted set mirrors the formats the external conversion service can
//! handle: PDF, common images, HTML, XML, the spreadsheet families, and CSV.
//! It is process-wide immutable configuration, built once at startup and
//! injected into the pipeline; tests construct their own sets.

use std::collections::HashSet;

/// Media types the conversion service accepts, used when
/// `ACCEPTED_CONTENT_TYPES` is not set.
pub const DEFAULT_ACCEPTED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/svg+xml",
    "text/html",
    "application/xml",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel.sheet.macroenabled.12",
    "application/vnd.ms-excel.sheet.binary.macroenabled.12",
    "application/vnd.ms-excel",
    "application/vnd.oasis.opendocument.spreadsheet",
    "text/csv",
    "application/vnd.apple.numbers",
];

/// Normalize a MIME type by stripping parameters (e.g. "text/csv; charset=utf-8" -> "text/csv").
pub fn normalize_media_type(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or(media_type)
        .trim()
        .to_lowercase()
}

/// Accepted-media-type predicate backing batch validation.
#[derive(Debug, Clone)]
pub struct FormatPolicy {
    accepted: HashSet<String>,
}

impl FormatPolicy {
    /// Build a policy from any list of media types. Entries are normalized,
    /// so "Application/PDF; q=1" and "application/pdf" collapse to one.
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            accepted: accepted
                .into_iter()
                .map(|s| normalize_media_type(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Policy over the default accepted set.
    pub fn default_set() -> Self {
        Self::new(DEFAULT_ACCEPTED_CONTENT_TYPES.iter().copied())
    }

    /// Whether a declared media type is accepted. Unknown and empty types are not.
    pub fn is_accepted(&self, media_type: &str) -> bool {
        let normalized = normalize_media_type(media_type);
        !normalized.is_empty() && self.accepted.contains(&normalized)
    }
}
