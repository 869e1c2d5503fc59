//! Question handlers: list, create, delete, search.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiPath, Page};
use crate::model::{NewQuestionRequest, SearchRequest};
use crate::response::success_ok;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::extract::State;

/// GET /api/v1/questions?page=N: one page of all questions plus the category map.
pub async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::list_questions(state.store.as_ref(), page).await?;
    Ok(success_ok(body))
}

/// POST /api/v1/questions: create a question.
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewQuestionRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::create_question(state.store.as_ref(), body).await?;
    Ok(success_ok(body))
}

/// DELETE /api/v1/questions/:question_id
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::delete_question(state.store.as_ref(), question_id).await?;
    Ok(success_ok(body))
}

/// POST /api/v1/questions/search?page=N: case-insensitive substring search on question text.
pub async fn search_questions(
    State(state): State<AppState>,
    Page(page): Page,
    ApiJson(body): ApiJson<SearchRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::search_questions(state.store.as_ref(), body, page).await?;
    Ok(success_ok(body))
}
