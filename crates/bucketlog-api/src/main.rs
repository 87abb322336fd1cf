//! Bucketlog API server entry point.

use std::sync::Arc;

use bucketlog_api::config::Config;
use bucketlog_api::error::AppError;
use bucketlog_api::state::AppState;
use bucketlog_core::id::RandomIdGenerator;
use bucketlog_core::session::SessionFactory;
use bucketlog_store::schema::ensure_schema;
use bucketlog_store::{InMemorySessionFactory, PgSessionFactory};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Bucketlog API server");

    let config = Config::from_env()?;
    let sessions = session_factory(&config).await?;

    let app_state = AppState::new(sessions, Arc::new(RandomIdGenerator));
    let app = bucketlog_api::app(app_state);

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to `PostgreSQL` and provisions the schema when a database URL is
/// configured; otherwise falls back to the in-memory store.
async fn session_factory(config: &Config) -> Result<Arc<dyn SessionFactory>, AppError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; events are kept in memory and lost on exit");
        return Ok(Arc::new(InMemorySessionFactory::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await?;
    ensure_schema(&pool).await?;
    tracing::info!("Database connection established");

    Ok(Arc::new(PgSessionFactory::new(pool)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
