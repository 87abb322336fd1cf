//! Storage session abstraction.
//!
//! Every request opens exactly one session through a `SessionFactory`, does
//! its reads and writes, and drops it. Dropping a session releases whatever
//! it holds and discards records that were staged but never committed, so
//! release happens on every exit path, errors included.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::event::{EventFilter, EventRecord};

/// A request-scoped handle to the durable store.
#[async_trait]
pub trait StorageSession: Send {
    /// Stages `record` for the next `commit`. Nothing is visible to other
    /// sessions until then.
    fn add(&mut self, record: EventRecord);

    /// Durably persists every staged record. Either all become visible or
    /// none do.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the store rejects the write.
    async fn commit(&mut self) -> Result<(), DomainError>;

    /// Returns committed records matching `filter`, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the read fails.
    async fn query(&mut self, filter: &EventFilter) -> Result<Vec<EventRecord>, DomainError>;
}

/// Opens storage sessions. One instance is built at startup and injected
/// into the HTTP layer.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// Acquires a new session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the store is unreachable.
    async fn open(&self) -> Result<Box<dyn StorageSession>, DomainError>;
}
