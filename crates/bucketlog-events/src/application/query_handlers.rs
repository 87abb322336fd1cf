//! Query handlers for the event service.
//!
//! This module contains query handlers that read committed events through a
//! storage session and return read-only view DTOs.

use bucketlog_core::bucket::BucketId;
use bucketlog_core::error::{DomainError, NotFound};
use bucketlog_core::event::EventFilter;
use bucketlog_core::session::SessionFactory;
use serde::Serialize;
use uuid::Uuid;

/// Read-only view of a single event. The bucket is not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    /// The event identifier.
    #[serde(rename = "ID")]
    pub id: Uuid,
    /// The event title.
    pub title: String,
    /// The event message.
    pub message: String,
}

/// Read-only view of the ids held by a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketEventsView {
    /// Event ids in store-native order.
    pub event_ids: Vec<Uuid>,
}

/// Lists the ids of every event in `bucket_id`.
///
/// # Errors
///
/// Returns `DomainError::NotFound(NotFound::EmptyBucket)` if the bucket holds
/// no events.
/// Returns `DomainError::Storage` if the read fails.
pub async fn list_event_ids(
    bucket_id: &BucketId,
    sessions: &dyn SessionFactory,
) -> Result<BucketEventsView, DomainError> {
    let mut session = sessions.open().await?;
    let records = session.query(&EventFilter::bucket(bucket_id)).await?;
    if records.is_empty() {
        return Err(NotFound::EmptyBucket.into());
    }
    Ok(BucketEventsView {
        event_ids: records.into_iter().map(|r| r.event_id).collect(),
    })
}

/// Retrieves the event `event_id` from `bucket_id`.
///
/// `event_id` is the raw path segment. A value that is not a UUID cannot
/// name a stored event, so it resolves to not-found without a read.
///
/// # Errors
///
/// Returns `DomainError::NotFound(NotFound::Event)` if no event with that id
/// exists in that bucket, even when the id exists in another bucket.
/// Returns `DomainError::Storage` if the read fails.
pub async fn get_event_by_id(
    bucket_id: &BucketId,
    event_id: &str,
    sessions: &dyn SessionFactory,
) -> Result<EventView, DomainError> {
    let Ok(event_id) = Uuid::parse_str(event_id) else {
        return Err(NotFound::Event.into());
    };

    let mut session = sessions.open().await?;
    let record = session
        .query(&EventFilter::event(bucket_id, event_id))
        .await?
        .into_iter()
        .next()
        .ok_or(NotFound::Event)?;

    Ok(EventView {
        id: record.event_id,
        title: record.title,
        message: record.message,
    })
}
