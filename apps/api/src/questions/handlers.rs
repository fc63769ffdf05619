use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::feedback::category::QuestionCategory;
use crate::questions::bank::{find_question, questions_for, PracticeQuestion};

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// GET /api/v1/questions?category=
pub async fn handle_list_questions(
    Query(params): Query<CategoryQuery>,
) -> Result<Json<Vec<&'static PracticeQuestion>>, AppError> {
    let category = match params.category.as_deref() {
        None => None,
        Some(tag) => Some(QuestionCategory::from_tag(tag).ok_or_else(|| {
            AppError::Validation(format!("unknown question category '{tag}'"))
        })?),
    };
    Ok(Json(questions_for(category)))
}

/// GET /api/v1/questions/:id
pub async fn handle_get_question(
    Path(id): Path<String>,
) -> Result<Json<&'static PracticeQuestion>, AppError> {
    find_question(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))
}
