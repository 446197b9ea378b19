//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - GraphQL endpoint plus GraphiQL playground at `/graphql`

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, ServerConfig};
