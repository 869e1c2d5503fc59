//! Trivia API routes, mounted under [`API_PREFIX`](super::API_PREFIX).

use crate::handlers::{
    create_question, delete_question, list_categories, list_category_questions, list_questions,
    play_quiz, search_questions,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn trivia_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:category_id/questions", get(list_category_questions))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/:question_id", delete(delete_question))
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
