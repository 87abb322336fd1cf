//! Bucketlog — event service.
//!
//! Responsible for recording events into buckets, listing the ids held by a
//! bucket, and fetching a single event scoped by its bucket.

pub mod application;
pub mod domain;
