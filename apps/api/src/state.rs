use std::sync::Arc;

use crate::config::Config;
use crate::feedback::engine::FeedbackEngine;
use crate::feedback::store::FeedbackStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable evaluator. Default: HeuristicFeedbackEngine.
    pub engine: Arc<dyn FeedbackEngine>,
    /// Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn FeedbackStore>,
}
