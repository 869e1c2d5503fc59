//! PostgreSQL backend. Every call checks a connection out of the pool for the
//! duration of one statement.

use super::TriviaStore;
use crate::error::AppError;
use crate::model::{Category, NewQuestion, Question};
use async_trait::async_trait;
use sqlx::PgPool;

/// Columns cast to BIGINT so tables created with INTEGER or TEXT ids still decode.
const QUESTION_COLUMNS: &str = "id::BIGINT AS id, question, answer, \
     category::BIGINT AS category, difficulty::BIGINT AS difficulty";
const CATEGORY_COLUMNS: &str = "id::BIGINT AS id, type";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

/// Escape LIKE wildcards so the term matches literally, then wrap it in `%`.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, AppError> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn questions(&self) -> Result<Vec<Question>, AppError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category::BIGINT = $1 ORDER BY id"
        );
        tracing::debug!(sql = %sql, category, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id"
        );
        let pattern = contains_pattern(term);
        tracing::debug!(sql = %sql, pattern = %pattern, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {QUESTION_COLUMNS}"
        );
        tracing::debug!(sql = %sql, category = new.category, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(&new.question)
            .bind(&new.answer)
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete question");
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Option<Question>, AppError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE id::BIGINT <> ALL($1) AND ($2::BIGINT IS NULL OR category::BIGINT = $2) \
             ORDER BY random() LIMIT 1"
        );
        tracing::debug!(sql = %sql, ?category, excluded = exclude.len(), "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(exclude)
            .bind(category)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
