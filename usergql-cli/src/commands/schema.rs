//! `print-schema`: dump the GraphQL SDL

use std::io::Write;

use anyhow::{Context, Result};

pub fn run_print_schema() -> Result<()> {
    let sdl = usergql_server::graphql::sdl();
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(sdl.as_bytes())
        .context("Failed to write schema to stdout")?;
    Ok(())
}
