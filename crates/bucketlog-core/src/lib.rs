//! Bucketlog Core — shared domain types and storage seams.
//!
//! This crate defines the event record, the bucket identifier rules, the
//! error taxonomy, and the traits through which the service reaches storage.
//! It contains no infrastructure code.

pub mod bucket;
pub mod error;
pub mod event;
pub mod id;
pub mod session;
