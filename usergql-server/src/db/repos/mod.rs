//! Repository implementations for database access
//!
//! Repositories borrow a single session and run one statement per call.

pub mod users;

pub use users::{DbError, UserRepo};
