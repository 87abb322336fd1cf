//! Command handlers for the event service.
//!
//! A handler opens one storage session, stages the new record, and commits.
//! The session is dropped on every return path.

use bucketlog_core::error::DomainError;
use bucketlog_core::event::EventRecord;
use bucketlog_core::id::IdGenerator;
use bucketlog_core::session::SessionFactory;
use uuid::Uuid;

use crate::domain::commands::CreateEvent;

fn to_record(command: &CreateEvent, event_id: Uuid) -> EventRecord {
    EventRecord {
        event_id,
        bucket_id: command.bucket_id().clone(),
        title: command.title().to_owned(),
        message: command.message().to_owned(),
    }
}

/// Handles the `CreateEvent` command: assigns a fresh id, persists the
/// record in a single write-and-commit, and returns the id.
///
/// No uniqueness lookup is done beforehand; collisions are left to the id
/// generator and the store's primary key.
///
/// # Errors
///
/// Returns `DomainError::Storage` if the session cannot be opened or the
/// commit fails. No id is returned in that case.
pub async fn handle_create_event(
    command: &CreateEvent,
    ids: &dyn IdGenerator,
    sessions: &dyn SessionFactory,
) -> Result<Uuid, DomainError> {
    let event_id = ids.next_id();

    let mut session = sessions.open().await?;
    session.add(to_record(command, event_id));
    session.commit().await?;

    tracing::debug!(bucket_id = %command.bucket_id(), %event_id, "event committed");
    Ok(event_id)
}

#[cfg(test)]
mod tests {
    use bucketlog_core::bucket::BucketId;
    use bucketlog_core::error::DomainError;
    use bucketlog_core::event::EventFilter;
    use bucketlog_core::id::RandomIdGenerator;
    use bucketlog_core::session::SessionFactory;
    use bucketlog_store::InMemorySessionFactory;
    use bucketlog_test_support::{FailingSessionFactory, SequenceIdGenerator};
    use uuid::Uuid;

    use crate::application::command_handlers::handle_create_event;
    use crate::domain::commands::CreateEvent;

    fn command(bucket: &str) -> CreateEvent {
        CreateEvent::new(
            BucketId::parse(bucket).unwrap(),
            "Test Event".to_owned(),
            "This is a test event".to_owned(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_handle_create_event_persists_record_with_generated_id() {
        // Arrange
        let event_id = Uuid::new_v4();
        let ids = SequenceIdGenerator::new(vec![event_id]);
        let sessions = InMemorySessionFactory::new();

        // Act
        let result = handle_create_event(&command("test_bucket"), &ids, &sessions).await;

        // Assert
        assert_eq!(result.unwrap(), event_id);

        let committed = sessions.committed().unwrap();
        assert_eq!(committed.len(), 1);

        let stored = &committed[0];
        assert_eq!(stored.event_id, event_id);
        assert_eq!(stored.bucket_id.as_str(), "test_bucket");
        assert_eq!(stored.title, "Test Event");
        assert_eq!(stored.message, "This is a test event");
    }

    #[tokio::test]
    async fn test_identical_creates_produce_distinct_ids() {
        // Arrange
        let ids = RandomIdGenerator;
        let sessions = InMemorySessionFactory::new();
        let command = command("test_bucket");

        // Act
        let first = handle_create_event(&command, &ids, &sessions).await.unwrap();
        let second = handle_create_event(&command, &ids, &sessions).await.unwrap();

        // Assert
        assert_ne!(first, second);

        let bucket = BucketId::parse("test_bucket").unwrap();
        let mut session = sessions.open().await.unwrap();
        for id in [first, second] {
            let found = session.query(&EventFilter::event(&bucket, id)).await.unwrap();
            assert_eq!(found.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_handle_create_event_returns_storage_error_when_commit_fails() {
        // Arrange
        let ids = SequenceIdGenerator::new(vec![Uuid::new_v4()]);
        let sessions = FailingSessionFactory;

        // Act
        let result = handle_create_event(&command("test_bucket"), &ids, &sessions).await;

        // Assert
        match result {
            Err(DomainError::Storage(_)) => {}
            other => panic!("expected Storage, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_colliding_id_is_rejected_by_store() {
        // Arrange
        let event_id = Uuid::new_v4();
        let ids = SequenceIdGenerator::new(vec![event_id, event_id]);
        let sessions = InMemorySessionFactory::new();
        handle_create_event(&command("a"), &ids, &sessions)
            .await
            .unwrap();

        // Act
        let result = handle_create_event(&command("b"), &ids, &sessions).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(sessions.committed().unwrap().len(), 1);
    }
}
