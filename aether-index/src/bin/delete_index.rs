//! Delete the Aether evidence index.

use std::process::ExitCode;

use aether_index::cli::{finish, init_tracing};
use aether_index::commands::delete_index;
use aether_index::{build_client, Settings};
use clap::Parser;

/// Delete the evidence index. Refuses unless --force is given.
#[derive(Parser, Debug)]
#[command(name = "delete-index")]
#[command(about = "Delete the Aether evidence index")]
struct Cli {
    /// Confirm the deletion
    #[arg(long)]
    force: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = delete_index(cli.force, || {
        let settings = Settings::load()?;
        build_client(&settings, &settings.index)
    })
    .await;

    finish(result.map(|_| ()))
}
