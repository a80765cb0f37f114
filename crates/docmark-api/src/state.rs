//! Application state shared across handlers.
//!
//! Everything here is built once at startup and read-only for the lifetime
//! of the process; requests share no mutable state with each other.

use std::sync::Arc;

use docmark_core::{Config, FormatPolicy};
use docmark_gateway::MarkdownGateway;

pub struct AppState {
    pub config: Config,
    pub policy: Arc<FormatPolicy>,
    pub gateway: Arc<dyn MarkdownGateway>,
}
