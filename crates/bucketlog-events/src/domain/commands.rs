//! Commands for the event service.

use bucketlog_core::bucket::BucketId;
use bucketlog_core::error::DomainError;

/// Command to record a new event in a bucket.
///
/// Constructed only through [`CreateEvent::new`], which rejects empty
/// titles and messages.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    bucket_id: BucketId,
    title: String,
    message: String,
}

impl CreateEvent {
    /// Builds the command.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedRequest` if `title` or `message` is
    /// empty.
    pub fn new(bucket_id: BucketId, title: String, message: String) -> Result<Self, DomainError> {
        if title.is_empty() {
            return Err(DomainError::MalformedRequest(
                "title must not be empty".to_owned(),
            ));
        }
        if message.is_empty() {
            return Err(DomainError::MalformedRequest(
                "message must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            bucket_id,
            title,
            message,
        })
    }

    /// The bucket the event is written into.
    #[must_use]
    pub fn bucket_id(&self) -> &BucketId {
        &self.bucket_id
    }

    /// The event title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The event message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
