use std::sync::Arc;

use crate::config::Config;
use crate::screening::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume analyzer. Production: `GeminiAnalyzer`. Tests swap in mocks.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Kept for handlers that need runtime settings beyond the analyzer.
    #[allow(dead_code)]
    pub config: Config,
}
