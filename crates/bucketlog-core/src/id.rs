//! Event identifier generation.
//!
//! In production, ids are random v4 UUIDs. Tests inject a generator that
//! yields a known sequence.

use uuid::Uuid;

/// Abstraction over event id generation.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> Uuid;
}

/// Production generator producing random 128-bit v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
