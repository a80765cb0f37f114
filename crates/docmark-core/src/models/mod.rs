//! Data models for the application
//!
//! Everything here is request-scoped: entries and results live for one
//! pipeline invocation and are discarded with the response.

mod conversion;

pub use conversion::*;
