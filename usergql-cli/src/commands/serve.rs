//! HTTP server command
//!
//! Builds the storage client, ensures the `users` table, and serves the
//! GraphQL API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use usergql_server::db::{
    ensure_schema, Database, DatabaseConfig, InMemoryUserStore, PgUserStore, SharedStore,
};
use usergql_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free database connection
    #[arg(long, default_value_t = 30)]
    pub acquire_timeout_secs: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep users in memory instead of PostgreSQL (data is lost on exit).
    /// Takes precedence over --database-url
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    if args.in_memory {
        tracing::warn!("Using in-memory store; users are lost on shutdown");
        let store: SharedStore = Arc::new(InMemoryUserStore::new());
        let state = AppState::new(store);
        return run_server(state, config).await.context("Server error");
    }

    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let db = Database::connect(&DatabaseConfig {
        url: database_url,
        max_connections: args.max_connections,
        acquire_timeout: Duration::from_secs(args.acquire_timeout_secs),
    })
    .await
    .context("Failed to create database pool")?;

    ensure_schema(&db)
        .await
        .context("Failed to create users table")?;

    let store: SharedStore = Arc::new(PgUserStore::new(db.clone()));
    let state = AppState::new(store);

    let served = run_server(state, config).await.context("Server error");
    db.close().await;
    served
}
