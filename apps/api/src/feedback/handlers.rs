//! Axum route handlers for the Feedback API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::composer::{score_response, ScoreRecord};
use crate::feedback::delivery::{analyze_delivery_from_transcript, DeliveryAnalysis};
use crate::feedback::engine::{FeedbackReport, Submission};
use crate::feedback::star::{compute_star_breakdown, StarBreakdown};
use crate::feedback::store::NewFeedbackRecord;
use crate::models::feedback::FeedbackRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `response_text` is optional on the wire so a missing field surfaces as a
/// validation error instead of a body-rejection.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub response_text: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StarRequest {
    pub response_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryRequest {
    pub transcript: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub response_text: Option<String>,
    pub category: Option<String>,
    pub user_id: Option<Uuid>,
    pub question_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub report: FeedbackReport,
    pub backend: &'static str,
    /// Present only when the report was persisted.
    pub record_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/feedback/score
pub async fn handle_score(Json(req): Json<ScoreRequest>) -> Result<Json<ScoreRecord>, AppError> {
    let submission = Submission::new(req.response_text, req.category.as_deref())?;
    Ok(Json(score_response(
        &submission.response_text,
        submission.category,
    )))
}

/// POST /api/v1/feedback/star
pub async fn handle_star(Json(req): Json<StarRequest>) -> Result<Json<StarBreakdown>, AppError> {
    let text = req
        .response_text
        .ok_or_else(|| AppError::Validation("response_text is required".to_string()))?;
    Ok(Json(compute_star_breakdown(&text)))
}

/// POST /api/v1/feedback/delivery
pub async fn handle_delivery(
    Json(req): Json<DeliveryRequest>,
) -> Result<Json<DeliveryAnalysis>, AppError> {
    let transcript = req
        .transcript
        .ok_or_else(|| AppError::Validation("transcript is required".to_string()))?;
    Ok(Json(analyze_delivery_from_transcript(&transcript)))
}

/// POST /api/v1/feedback
///
/// Full evaluation: score + STAR + delivery. Persisted only when both
/// `user_id` and `question_id` are supplied.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let submission = Submission::new(req.response_text, req.category.as_deref())?;
    let report = state.engine.evaluate(&submission).await?;

    let record_id = match (req.user_id, req.question_id) {
        (Some(user_id), Some(question_id)) => {
            let row = state
                .store
                .save(NewFeedbackRecord {
                    user_id,
                    question_id,
                    category: submission.category,
                    report: report.clone(),
                })
                .await?;
            Some(row.id)
        }
        _ => None,
    };

    Ok(Json(EvaluateResponse {
        report,
        backend: state.engine.backend(),
        record_id,
    }))
}

/// GET /api/v1/feedback/history?user_id=
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<FeedbackRow>>, AppError> {
    let rows = state.store.history(params.user_id).await?;
    Ok(Json(rows))
}
