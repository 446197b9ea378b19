//! usergql CLI - runs the user GraphQL API
//!
//! - `serve`: start the HTTP server (PostgreSQL or in-memory store)
//! - `print-schema`: print the GraphQL SDL

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "usergql",
    author,
    version,
    about = "GraphQL API for user records backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (GraphQL at /graphql)
    Serve(commands::serve::ServeArgs),
    /// Print the GraphQL schema (SDL) to stdout
    PrintSchema,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::PrintSchema => commands::run_print_schema(),
    };

    tracing_setup::shutdown_otel();
    result
}
