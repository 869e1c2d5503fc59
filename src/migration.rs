//! Database bootstrap: create the database and the trivia tables, seed categories.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Categories inserted into an empty store, in id order.
pub const SEED_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

const CATEGORIES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id BIGSERIAL PRIMARY KEY,
        type TEXT NOT NULL
    )
"#;

const QUESTIONS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS questions (
        id BIGSERIAL PRIMARY KEY,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        category BIGINT NOT NULL REFERENCES categories (id) ON DELETE CASCADE,
        difficulty BIGINT NOT NULL
    )
"#;

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// server's `postgres` database to run CREATE DATABASE. Call before creating the pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| {
        ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: database_url.to_string(),
            reason: e.to_string(),
        }
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (url of the `postgres` maintenance database, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let (location, query) = match url.split_once('?') {
        Some((location, query)) => (location, format!("?{query}")),
        None => (url, String::new()),
    };
    let scheme_end = location.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = location
        .rfind('/')
        .filter(|&i| i >= scheme_end)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: url.to_string(),
            reason: "no database path".into(),
        })?
        + 1;
    let db_name = location.get(path_start..).unwrap_or("").trim();
    let base = location.get(..path_start).unwrap_or(location);
    Ok((format!("{base}postgres{query}"), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Create `categories` and `questions` if missing. Idempotent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CATEGORIES_DDL).execute(pool).await?;
    sqlx::query(QUESTIONS_DDL).execute(pool).await?;
    Ok(())
}

/// Insert [`SEED_CATEGORIES`] when the categories table is empty. Returns how many rows were added.
pub async fn seed_categories(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(0);
    }
    let mut inserted = 0u64;
    for kind in SEED_CATEGORIES {
        inserted += sqlx::query("INSERT INTO categories (type) VALUES ($1)")
            .bind(*kind)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    tx.commit().await?;
    tracing::info!(inserted, "seeded categories");
    Ok(inserted)
}
