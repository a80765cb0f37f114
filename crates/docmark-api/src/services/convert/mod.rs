//! Conversion pipeline orchestration.

mod service;

pub use service::ConvertService;
