//! Feedback Engine — pluggable, trait-based evaluator for interview responses.
//!
//! Default: `HeuristicFeedbackEngine` (keyword rules, synchronous, deterministic).
//! The trait is async so a future backend can do real inference behind the
//! same seam; the heuristic core itself never suspends.
//!
//! `AppState` holds an `Arc<dyn FeedbackEngine>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::feedback::category::QuestionCategory;
use crate::feedback::composer::{score_response, ScoreRecord};
use crate::feedback::delivery::{analyze_delivery_from_transcript, DeliveryAnalysis};
use crate::feedback::star::{compute_star_breakdown, StarBreakdown};

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A validated response ready for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub response_text: String,
    pub category: Option<QuestionCategory>,
}

impl Submission {
    /// Guards the one undefined input: a missing text. Empty or
    /// whitespace-only text is valid and scores as the worst case.
    /// Unknown category tags are dropped, not rejected.
    pub fn new(
        response_text: Option<String>,
        category_tag: Option<&str>,
    ) -> Result<Self, FeedbackError> {
        let response_text = response_text
            .ok_or_else(|| FeedbackError::InvalidInput("response_text is required".to_string()))?;

        Ok(Self {
            response_text,
            category: category_tag.and_then(QuestionCategory::from_tag),
        })
    }
}

/// Score, STAR breakdown and delivery analysis for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub score: ScoreRecord,
    pub star: StarBreakdown,
    pub delivery: DeliveryAnalysis,
}

#[async_trait]
pub trait FeedbackEngine: Send + Sync {
    async fn evaluate(&self, submission: &Submission) -> Result<FeedbackReport, FeedbackError>;

    /// Label reported alongside results, e.g. "heuristic".
    fn backend(&self) -> &'static str;
}

pub struct HeuristicFeedbackEngine;

#[async_trait]
impl FeedbackEngine for HeuristicFeedbackEngine {
    async fn evaluate(&self, submission: &Submission) -> Result<FeedbackReport, FeedbackError> {
        Ok(assemble_report(submission))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Runs the three independent pipelines over the same text.
pub fn assemble_report(submission: &Submission) -> FeedbackReport {
    let text = submission.response_text.as_str();
    let report = FeedbackReport {
        score: score_response(text, submission.category),
        star: compute_star_breakdown(text),
        delivery: analyze_delivery_from_transcript(text),
    };

    debug!(
        score = report.score.score,
        delivery = report.delivery.overall_score,
        category = submission.category.map(|c| c.as_str()).unwrap_or("none"),
        "Evaluated response"
    );

    report
}
