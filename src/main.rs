//! Trivia API server: reads settings from the environment, prepares the store, serves the API.

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use trivia_api::{
    app, ensure_database_exists, ensure_tables, seed_categories, telemetry::init_tracing, AppState,
    MemoryStore, PgStore, Settings, StoreKind,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = Settings::from_env()?;
    let state = match settings.store {
        StoreKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            tracing::info!("ensuring trivia tables");
            ensure_tables(&pool).await?;
            if settings.seed_categories {
                seed_categories(&pool).await?;
            }
            AppState::new(PgStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            if settings.seed_categories {
                AppState::new(MemoryStore::seeded())
            } else {
                AppState::new(MemoryStore::new())
            }
        }
    };

    let router = app(state, settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
