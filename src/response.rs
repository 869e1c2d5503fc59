//! Success bodies for each endpoint. Every one carries `success: true`.

use crate::model::{CategoryMap, Question};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CategoriesBody {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Serialize, Debug)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    pub total_questions: usize,
    /// Always null on the unscoped listing.
    pub current_category: Option<i64>,
}

#[derive(Serialize, Debug)]
pub struct CategoryQuestionPage {
    pub success: bool,
    pub current_category: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Serialize, Debug)]
pub struct DeletedBody {
    pub success: bool,
    pub question_id: i64,
}

#[derive(Serialize, Debug)]
pub struct CreatedBody {
    pub success: bool,
    pub created_question: Question,
    pub id: i64,
}

#[derive(Serialize, Debug)]
pub struct SearchResults {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Either a question or, once the pool is exhausted, a message. Never both.
#[derive(Serialize, Debug)]
pub struct QuizTurn {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub const QUESTIONS_PLAYED_OUT: &str = "All questions are played out";

impl QuizTurn {
    pub fn next(question: Question) -> Self {
        QuizTurn {
            success: true,
            question: Some(question),
            message: None,
        }
    }

    pub fn played_out() -> Self {
        QuizTurn {
            success: true,
            question: None,
            message: Some(QUESTIONS_PLAYED_OUT.to_string()),
        }
    }
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
