//! Endpoint logic: pagination, validation and the trivia operations.

mod pagination;
mod trivia;
mod validation;
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use trivia::{TriviaService, ALL_CATEGORIES};
pub use validation::{FieldViolation, RequestValidator, ValidationErrors, MIN_DIFFICULTY};
