//! Domain layer for the event service.

pub mod commands;
