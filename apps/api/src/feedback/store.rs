//! Feedback Store — where evaluated reports are handed off for persistence.
//!
//! `PgFeedbackStore` writes to PostgreSQL; `InMemoryFeedbackStore` backs
//! local runs without `DATABASE_URL` and the test suite. The scoring core
//! never sees either.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::category::QuestionCategory;
use crate::feedback::engine::FeedbackReport;
use crate::models::feedback::FeedbackRow;

/// A report about to be stored.
#[derive(Debug, Clone)]
pub struct NewFeedbackRecord {
    pub user_id: Uuid,
    pub question_id: String,
    pub category: Option<QuestionCategory>,
    pub report: FeedbackReport,
}

impl NewFeedbackRecord {
    fn into_row(self) -> Result<FeedbackRow, AppError> {
        let report = serde_json::to_value(&self.report)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("report serialization failed: {e}")))?;

        Ok(FeedbackRow {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            question_id: self.question_id,
            category: self.category.map(|c| c.as_str().to_string()),
            score: self.report.score.score as i32,
            report,
            created_at: Utc::now(),
        })
    }
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn save(&self, record: NewFeedbackRecord) -> Result<FeedbackRow, AppError>;

    /// All records for a user, newest first.
    async fn history(&self, user_id: Uuid) -> Result<Vec<FeedbackRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgFeedbackStore {
    pool: PgPool,
}

impl PgFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn save(&self, record: NewFeedbackRecord) -> Result<FeedbackRow, AppError> {
        let row = record.into_row()?;

        let saved = sqlx::query_as::<_, FeedbackRow>(
            r#"
            INSERT INTO feedback_records
                (id, user_id, question_id, category, score, report, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(&row.question_id)
        .bind(&row.category)
        .bind(row.score)
        .bind(&row.report)
        .bind(row.created_at)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored feedback {} for user {} question {}",
            saved.id, saved.user_id, saved.question_id
        );
        Ok(saved)
    }

    async fn history(&self, user_id: Uuid) -> Result<Vec<FeedbackRow>, AppError> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            "SELECT * FROM feedback_records WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryFeedbackStore {
    rows: RwLock<Vec<FeedbackRow>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn save(&self, record: NewFeedbackRecord) -> Result<FeedbackRow, AppError> {
        let row = record.into_row()?;
        self.rows.write().await.push(row.clone());
        info!(
            "Stored feedback {} for user {} question {} (in-memory)",
            row.id, row.user_id, row.question_id
        );
        Ok(row)
    }

    async fn history(&self, user_id: Uuid) -> Result<Vec<FeedbackRow>, AppError> {
        let rows = self.rows.read().await;
        // insertion order is chronological, so reverse for newest first
        Ok(rows
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
