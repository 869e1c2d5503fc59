//! Category handlers: list categories, list questions of one category.

use crate::error::AppError;
use crate::extractors::{ApiPath, Page};
use crate::response::success_ok;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::extract::State;

/// GET /api/v1/categories: id to type for every category.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::list_categories(state.store.as_ref()).await?;
    Ok(success_ok(body))
}

/// GET /api/v1/categories/:category_id/questions?page=N: one page of a category's questions.
pub async fn list_category_questions(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<i64>,
    Page(page): Page,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::questions_in_category(state.store.as_ref(), category_id, page).await?;
    Ok(success_ok(body))
}
