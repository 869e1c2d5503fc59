//! Request validation for question creation.

use crate::model::{NewQuestion, NewQuestionRequest};
use serde::Serialize;
use std::fmt;

/// Lowest accepted difficulty. Zero is a real rating, not a missing value.
pub const MIN_DIFFICULTY: i64 = 0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every problem found in one request body, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check the shape of a new question. Category existence is checked by the caller
    /// against the store, adding to the same error list.
    pub fn new_question(body: NewQuestionRequest) -> Result<NewQuestion, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let question = required_text(&mut errors, "question", body.question);
        let answer = required_text(&mut errors, "answer", body.answer);

        let difficulty = match body.difficulty {
            None => {
                errors.push("difficulty", "difficulty is required");
                None
            }
            Some(d) if d < MIN_DIFFICULTY => {
                errors.push(
                    "difficulty",
                    format!("difficulty must not be below {MIN_DIFFICULTY}"),
                );
                None
            }
            Some(d) => Some(d),
        };

        let category = match body.category {
            None => {
                errors.push("category", "category is required");
                None
            }
            Some(c) => Some(c),
        };

        match (question, answer, difficulty, category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) if errors.is_empty() => {
                Ok(NewQuestion {
                    question,
                    answer,
                    category,
                    difficulty,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        Some(_) => {
            errors.push(field, format!("{field} must not be empty"));
            None
        }
        None => {
            errors.push(field, format!("{field} is required"));
            None
        }
    }
}
