use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted evaluation, keyed by user + question.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_id: String,
    pub category: Option<String>,
    pub score: i32,
    /// Serialized `FeedbackReport`.
    pub report: Value,
    pub created_at: DateTime<Utc>,
}
