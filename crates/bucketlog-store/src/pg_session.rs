//! `PostgreSQL` implementation of the storage session traits.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgRow;
use sqlx::{Connection, PgPool, Postgres, Row};
use uuid::Uuid;

use bucketlog_core::bucket::BucketId;
use bucketlog_core::error::DomainError;
use bucketlog_core::event::{EventFilter, EventRecord};
use bucketlog_core::session::{SessionFactory, StorageSession};

const INSERT_EVENT: &str =
    "INSERT INTO events (event_id, bucket_id, title, message) VALUES ($1, $2, $3, $4)";

const SELECT_BY_BUCKET: &str =
    "SELECT event_id, bucket_id, title, message FROM events WHERE bucket_id = $1";

const SELECT_BY_BUCKET_AND_ID: &str = "SELECT event_id, bucket_id, title, message FROM events \
     WHERE bucket_id = $1 AND event_id = $2";

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Opens sessions backed by pooled `PostgreSQL` connections.
#[derive(Debug, Clone)]
pub struct PgSessionFactory {
    pool: PgPool,
}

impl PgSessionFactory {
    /// Creates a new `PgSessionFactory`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionFactory for PgSessionFactory {
    async fn open(&self) -> Result<Box<dyn StorageSession>, DomainError> {
        let conn = self.pool.acquire().await.map_err(storage_error)?;
        Ok(Box::new(PgStorageSession {
            conn,
            staged: Vec::new(),
        }))
    }
}

/// A session holding one pooled connection. Dropping it returns the
/// connection to the pool.
#[derive(Debug)]
pub struct PgStorageSession {
    conn: PoolConnection<Postgres>,
    staged: Vec<EventRecord>,
}

#[async_trait]
impl StorageSession for PgStorageSession {
    fn add(&mut self, record: EventRecord) {
        self.staged.push(record);
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        let staged = std::mem::take(&mut self.staged);
        if staged.is_empty() {
            return Ok(());
        }

        // Dropping `tx` on an early return rolls the whole batch back.
        let mut tx = self.conn.begin().await.map_err(storage_error)?;
        for record in &staged {
            sqlx::query(INSERT_EVENT)
                .bind(record.event_id)
                .bind(record.bucket_id.as_str())
                .bind(&record.title)
                .bind(&record.message)
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;
        }
        tx.commit().await.map_err(storage_error)?;

        tracing::debug!(count = staged.len(), "committed events");
        Ok(())
    }

    async fn query(&mut self, filter: &EventFilter) -> Result<Vec<EventRecord>, DomainError> {
        let rows = match filter.event_id {
            Some(event_id) => {
                sqlx::query(SELECT_BY_BUCKET_AND_ID)
                    .bind(filter.bucket_id.as_str())
                    .bind(event_id)
                    .fetch_all(&mut *self.conn)
                    .await
            }
            None => {
                sqlx::query(SELECT_BY_BUCKET)
                    .bind(filter.bucket_id.as_str())
                    .fetch_all(&mut *self.conn)
                    .await
            }
        }
        .map_err(storage_error)?;

        rows.iter().map(record_from_row).collect()
    }
}

fn record_from_row(row: &PgRow) -> Result<EventRecord, DomainError> {
    let event_id: Uuid = row.try_get("event_id").map_err(storage_error)?;
    let bucket_id: String = row.try_get("bucket_id").map_err(storage_error)?;
    let title: String = row.try_get("title").map_err(storage_error)?;
    let message: String = row.try_get("message").map_err(storage_error)?;

    let bucket_id = BucketId::parse(&bucket_id).map_err(|_| {
        DomainError::Storage(format!("stored event {event_id} has malformed bucket id"))
    })?;

    Ok(EventRecord {
        event_id,
        bucket_id,
        title,
        message,
    })
}

fn storage_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::Storage("duplicate event id".to_owned());
        }
    }
    DomainError::Storage(err.to_string())
}
