pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::questions::handlers as questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Feedback API
        .route("/api/v1/feedback", post(feedback::handle_evaluate))
        .route("/api/v1/feedback/score", post(feedback::handle_score))
        .route("/api/v1/feedback/star", post(feedback::handle_star))
        .route("/api/v1/feedback/delivery", post(feedback::handle_delivery))
        .route("/api/v1/feedback/history", get(feedback::handle_history))
        // Question bank
        .route("/api/v1/questions", get(questions::handle_list_questions))
        .route("/api/v1/questions/:id", get(questions::handle_get_question))
        .with_state(state)
}
