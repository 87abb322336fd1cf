//! Application layer: handlers that turn validated requests into storage
//! operations.

pub mod command_handlers;
pub mod query_handlers;
