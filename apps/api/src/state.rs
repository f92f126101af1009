use std::sync::Arc;

use crate::config::Config;
use crate::extract::cache::ExtractionCache;
use crate::matcher::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable similarity backend. Default: `HashingScorer`.
    pub scorer: Arc<dyn SimilarityScorer>,
    /// Content-addressed memoization of decode work, shared across requests.
    pub extraction_cache: Arc<ExtractionCache>,
}
