//! Create the Aether evidence index with its fixed schema.

use std::process::ExitCode;

use aether_index::cli::{finish, init_tracing};
use aether_index::commands::create_index;
use aether_index::{build_client, AdminError, Settings};
use clap::Parser;

/// Create the evidence index. Does nothing if it already exists.
#[derive(Parser, Debug)]
#[command(name = "create-index")]
#[command(about = "Create the Aether evidence index")]
struct Cli {}

async fn run() -> Result<(), AdminError> {
    let settings = Settings::load()?;
    let client = build_client(&settings, &settings.index)?;
    create_index(&client).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let _cli = Cli::parse();

    finish(run().await)
}
