//! Storage client and per-call sessions
//!
//! `Database` wraps an sqlx `PgPool` with explicit connection limits. A
//! `Session` is one pooled connection; dropping it hands the connection back
//! to the pool, so every exit path of a caller releases it.

use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use super::repos::DbError;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long `session()` waits for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// One unit-of-work connection, returned to the pool on drop.
pub type Session = PoolConnection<Postgres>;

/// Connection settings for the storage client.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/usergql".to_string()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Process-wide storage client.
///
/// Cheap to clone; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial connection fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let db = Database::connect(&DatabaseConfig::new("postgres://localhost/usergql")).await?;
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "database pool ready"
        );
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Acquire a session for one operation.
    pub async fn session(&self) -> Result<Session, DbError> {
        let session = self.pool.acquire().await?;
        tracing::trace!(idle = self.pool.num_idle(), "session acquired");
        Ok(session)
    }

    /// Close the pool, waiting for checked-out sessions to come back.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
