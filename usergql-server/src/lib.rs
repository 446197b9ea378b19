//! usergql-server: GraphQL API over a single `users` table
//!
//! Exposes user CRUD as a GraphQL schema served over HTTP. Every resolver
//! call acquires its own database session, runs one statement, and releases
//! the session before returning.

pub mod db;
pub mod error;
pub mod graphql;
pub mod http;
pub mod models;
pub mod state;

pub use error::{Result, ServerError};
pub use graphql::{build_schema, UserSchema};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
