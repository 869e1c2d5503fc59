//! Trivia API: categories, paginated questions, search and quizzes over a pluggable store.

pub mod config;
pub mod deserializers;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, ensure_tables, seed_categories};
pub use model::{Category, NewQuestion, Question};
pub use routes::{app, API_PREFIX};
pub use service::{TriviaService, QUESTIONS_PER_PAGE};
pub use state::AppState;
pub use store::{MemoryStore, PgStore, TriviaStore};
