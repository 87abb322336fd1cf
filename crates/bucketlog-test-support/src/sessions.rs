//! Test session factories — mock `SessionFactory` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bucketlog_core::error::DomainError;
use bucketlog_core::event::{EventFilter, EventRecord};
use bucketlog_core::session::{SessionFactory, StorageSession};
use bucketlog_store::InMemorySessionFactory;

/// A session factory over a fresh in-memory store that counts how many
/// sessions were opened. Useful for asserting that a request was rejected
/// before it touched storage.
#[derive(Debug, Default)]
pub struct RecordingSessionFactory {
    inner: InMemorySessionFactory,
    opened: AtomicUsize,
}

impl RecordingSessionFactory {
    /// Create a new recording factory over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions opened so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of every committed event.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory table lock is poisoned.
    pub fn committed(&self) -> Vec<EventRecord> {
        self.inner.committed().unwrap()
    }
}

#[async_trait]
impl SessionFactory for RecordingSessionFactory {
    async fn open(&self) -> Result<Box<dyn StorageSession>, DomainError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.inner.open().await
    }
}

/// A session factory whose sessions open fine but fail every commit and
/// query with a storage error. Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSessionFactory;

#[async_trait]
impl SessionFactory for FailingSessionFactory {
    async fn open(&self) -> Result<Box<dyn StorageSession>, DomainError> {
        Ok(Box::new(FailingSession))
    }
}

#[derive(Debug)]
struct FailingSession;

#[async_trait]
impl StorageSession for FailingSession {
    fn add(&mut self, _record: EventRecord) {}

    async fn commit(&mut self) -> Result<(), DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }

    async fn query(&mut self, _filter: &EventFilter) -> Result<Vec<EventRecord>, DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }
}

/// A session factory that cannot reach its store: every `open` fails.
#[derive(Debug)]
pub struct UnreachableSessionFactory;

#[async_trait]
impl SessionFactory for UnreachableSessionFactory {
    async fn open(&self) -> Result<Box<dyn StorageSession>, DomainError> {
        Err(DomainError::Storage("pool timed out".into()))
    }
}
