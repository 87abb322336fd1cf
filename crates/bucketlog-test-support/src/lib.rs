//! Shared test doubles for the Bucketlog event service.

mod ids;
mod sessions;

pub use ids::SequenceIdGenerator;
pub use sessions::{FailingSessionFactory, RecordingSessionFactory, UnreachableSessionFactory};
