//! Test ids — deterministic `IdGenerator` implementations for tests.

use std::sync::Mutex;

use bucketlog_core::id::IdGenerator;
use uuid::Uuid;

/// An id generator that returns values from a predetermined sequence. Panics
/// if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    values: Vec<Uuid>,
    index: Mutex<usize>,
}

impl SequenceIdGenerator {
    /// Create a new `SequenceIdGenerator` with the given values.
    #[must_use]
    pub fn new(values: Vec<Uuid>) -> Self {
        Self {
            values,
            index: Mutex::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Uuid {
        let mut index = self.index.lock().unwrap();
        let id = self.values[*index];
        *index += 1;
        id
    }
}
