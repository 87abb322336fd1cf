//! The persisted event record and the filters used to read it back.

use uuid::Uuid;

use crate::bucket::BucketId;

/// Stored representation of an event.
///
/// Records are immutable once committed; the service never updates or
/// deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Server-assigned identifier, unique across all buckets.
    pub event_id: Uuid,
    /// Namespace the event was written into.
    pub bucket_id: BucketId,
    /// Event title. Never empty.
    pub title: String,
    /// Event body. Never empty.
    pub message: String,
}

/// Equality predicates for reading events.
///
/// `bucket_id` always applies. When `event_id` is set, a record must match
/// both, so an id that lives in another bucket is not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    /// Bucket the records must belong to.
    pub bucket_id: BucketId,
    /// Optional exact event id.
    pub event_id: Option<Uuid>,
}

impl EventFilter {
    /// Matches every event in `bucket_id`.
    #[must_use]
    pub fn bucket(bucket_id: &BucketId) -> Self {
        Self {
            bucket_id: bucket_id.clone(),
            event_id: None,
        }
    }

    /// Matches the single event `event_id` within `bucket_id`.
    #[must_use]
    pub fn event(bucket_id: &BucketId, event_id: Uuid) -> Self {
        Self {
            bucket_id: bucket_id.clone(),
            event_id: Some(event_id),
        }
    }

    /// Returns `true` if `record` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, record: &EventRecord) -> bool {
        record.bucket_id == self.bucket_id
            && self.event_id.is_none_or(|id| record.event_id == id)
    }
}
