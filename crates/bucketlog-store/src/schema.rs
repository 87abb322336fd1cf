//! Event store database schema.

use sqlx::PgPool;

/// SQL to create the events table.
pub const CREATE_EVENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS events (
    event_id   UUID PRIMARY KEY,
    bucket_id  TEXT NOT NULL,
    title      TEXT NOT NULL CHECK (title <> ''),
    message    TEXT NOT NULL CHECK (message <> '')
);

CREATE INDEX IF NOT EXISTS idx_events_bucket_id
    ON events (bucket_id);
";

/// Creates the events table and its index if they do not exist yet.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the statements fail.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_EVENTS_TABLE).execute(pool).await?;
    tracing::debug!("events schema ensured");
    Ok(())
}
