//! Command implementations for the usergql CLI

pub mod schema;
pub mod serve;

pub use schema::run_print_schema;
pub use serve::run_serve;
