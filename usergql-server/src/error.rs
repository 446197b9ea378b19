//! Error types for usergql-server startup and serving

use thiserror::Error;

use crate::db::DbError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Connection error: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
