use std::sync::Arc;

use crate::config::Config;
use crate::screening::pipeline::ScreeningPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; each request runs it on a blocking thread.
    pub pipeline: Arc<ScreeningPipeline>,
}
