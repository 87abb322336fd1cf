//! Bucketlog Store — storage session backends.
//!
//! `PgSessionFactory` persists events in `PostgreSQL`. `InMemorySessionFactory`
//! keeps them in process memory and is used when no database is configured.

pub mod memory;
pub mod pg_session;
pub mod schema;

pub use memory::InMemorySessionFactory;
pub use pg_session::PgSessionFactory;
