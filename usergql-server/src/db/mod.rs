//! Database layer - storage client, schema bootstrap, and user repository
//!
//! # Design Principles
//!
//! - One storage client per process, injected into the GraphQL schema
//! - One pooled session per resolver call, released on drop
//! - One statement per operation; no check-then-write round trips

pub mod in_memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use in_memory::InMemoryUserStore;
pub use pool::{Database, DatabaseConfig, Session};
pub use repos::{DbError, UserRepo};
pub use schema::ensure_schema;
pub use store::{PgUserStore, SharedStore, UserStore};
