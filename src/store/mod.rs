//! Storage seam for questions and categories.
//!
//! Handlers never talk to a database directly; they go through [`TriviaStore`].
//! [`PgStore`] is the production backend, [`MemoryStore`] keeps everything in
//! process for local runs and tests.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Category, NewQuestion, Question};
use async_trait::async_trait;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    async fn category(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// All questions ordered by id.
    async fn questions(&self) -> Result<Vec<Question>, AppError>;

    /// Questions of one category ordered by id.
    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError>;

    async fn question(&self, id: i64) -> Result<Option<Question>, AppError>;

    /// Store a new question and return it with its generated id.
    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError>;

    /// Delete by id. Returns false when no row had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, AppError>;

    /// One question chosen uniformly at random among those not in `exclude`,
    /// restricted to `category` when given.
    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Option<Question>, AppError>;

    /// Cheap round trip used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
