//! Quiz handler: one random unplayed question per call.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::QuizRequest;
use crate::response::success_ok;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::extract::State;

/// POST /api/v1/quizzes: next random question not yet played.
pub async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let turn = TriviaService::next_quiz_question(state.store.as_ref(), body).await?;
    Ok(success_ok(turn))
}
