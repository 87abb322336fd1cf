//! In-memory storage backend.
//!
//! Events live in a process-local vector shared by every session the
//! factory opens. Contents vanish when the process exits.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use bucketlog_core::error::DomainError;
use bucketlog_core::event::{EventFilter, EventRecord};
use bucketlog_core::session::{SessionFactory, StorageSession};

/// Opens sessions over a shared in-memory event table.
///
/// Cloning the factory shares the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionFactory {
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl InMemorySessionFactory {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every committed event, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the table lock is poisoned.
    pub fn committed(&self) -> Result<Vec<EventRecord>, DomainError> {
        Ok(lock(&self.events)?.clone())
    }
}

#[async_trait]
impl SessionFactory for InMemorySessionFactory {
    async fn open(&self) -> Result<Box<dyn StorageSession>, DomainError> {
        Ok(Box::new(InMemorySession {
            events: Arc::clone(&self.events),
            staged: Vec::new(),
        }))
    }
}

/// A session over the shared table. Staged records are dropped with it.
#[derive(Debug)]
pub struct InMemorySession {
    events: Arc<Mutex<Vec<EventRecord>>>,
    staged: Vec<EventRecord>,
}

#[async_trait]
impl StorageSession for InMemorySession {
    fn add(&mut self, record: EventRecord) {
        self.staged.push(record);
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        let staged = std::mem::take(&mut self.staged);
        let mut events = lock(&self.events)?;

        for (i, record) in staged.iter().enumerate() {
            let duplicate = events.iter().any(|e| e.event_id == record.event_id)
                || staged[..i].iter().any(|e| e.event_id == record.event_id);
            if duplicate {
                return Err(DomainError::Storage("duplicate event id".to_owned()));
            }
        }

        events.extend(staged);
        Ok(())
    }

    async fn query(&mut self, filter: &EventFilter) -> Result<Vec<EventRecord>, DomainError> {
        let events = lock(&self.events)?;
        Ok(events
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

fn lock(events: &Mutex<Vec<EventRecord>>) -> Result<MutexGuard<'_, Vec<EventRecord>>, DomainError> {
    events
        .lock()
        .map_err(|_| DomainError::Storage("in-memory event table lock poisoned".to_owned()))
}

#[cfg(test)]
mod tests {
    use bucketlog_core::bucket::BucketId;
    use uuid::Uuid;

    use super::*;

    fn record(bucket: &str, event_id: Uuid) -> EventRecord {
        EventRecord {
            event_id,
            bucket_id: BucketId::parse(bucket).unwrap(),
            title: "Test Event".to_owned(),
            message: "This is a test event".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_staged_records_are_invisible_until_commit() {
        // Arrange
        let factory = InMemorySessionFactory::new();
        let bucket = BucketId::parse("alpha").unwrap();
        let mut writer = factory.open().await.unwrap();
        let mut reader = factory.open().await.unwrap();

        // Act
        writer.add(record("alpha", Uuid::new_v4()));
        let before = reader.query(&EventFilter::bucket(&bucket)).await.unwrap();
        writer.commit().await.unwrap();
        let after = reader.query(&EventFilter::bucket(&bucket)).await.unwrap();

        // Assert
        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }

    #[tokio::test]
    async fn test_dropping_session_discards_uncommitted_records() {
        // Arrange
        let factory = InMemorySessionFactory::new();

        // Act
        {
            let mut session = factory.open().await.unwrap();
            session.add(record("alpha", Uuid::new_v4()));
        }

        // Assert
        assert!(factory.committed().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_rejects_duplicate_id_and_writes_nothing() {
        // Arrange
        let factory = InMemorySessionFactory::new();
        let id = Uuid::new_v4();
        let mut first = factory.open().await.unwrap();
        first.add(record("alpha", id));
        first.commit().await.unwrap();

        // Act
        let mut second = factory.open().await.unwrap();
        second.add(record("beta", Uuid::new_v4()));
        second.add(record("beta", id));
        let result = second.commit().await;

        // Assert
        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(factory.committed().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_query_filters_by_bucket_and_id() {
        // Arrange
        let factory = InMemorySessionFactory::new();
        let shared_id = Uuid::new_v4();
        let mut session = factory.open().await.unwrap();
        session.add(record("alpha", shared_id));
        session.add(record("alpha", Uuid::new_v4()));
        session.add(record("beta", Uuid::new_v4()));
        session.commit().await.unwrap();

        let alpha = BucketId::parse("alpha").unwrap();
        let beta = BucketId::parse("beta").unwrap();

        // Act
        let in_alpha = session.query(&EventFilter::bucket(&alpha)).await.unwrap();
        let hit = session
            .query(&EventFilter::event(&alpha, shared_id))
            .await
            .unwrap();
        let miss = session
            .query(&EventFilter::event(&beta, shared_id))
            .await
            .unwrap();

        // Assert
        assert_eq!(in_alpha.len(), 2);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].event_id, shared_id);
        assert!(miss.is_empty());
    }
}
