//! Seed the Aether evidence index from plain-text files.

use std::path::PathBuf;
use std::process::ExitCode;

use aether_index::cli::{finish, init_tracing};
use aether_index::commands::{example_dir, seed_index};
use aether_index::{build_client, Settings};
use chrono::Local;
use clap::Parser;

/// Seed the evidence index with documents derived from text files.
#[derive(Parser, Debug)]
#[command(name = "seed-index")]
#[command(about = "Seed the Aether evidence index with example documents")]
struct Cli {
    /// Text files to index (defaults to the bundled examples)
    #[arg(long, num_args = 0..)]
    files: Vec<PathBuf>,

    /// Index name override
    #[arg(long)]
    index: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let published_at = Local::now().date_naive();
    let result = seed_index(&cli.files, &example_dir(), published_at, || {
        let settings = Settings::load()?;
        let index = cli.index.clone().unwrap_or_else(|| settings.index.clone());
        build_client(&settings, &index)
    })
    .await;

    finish(result.map(|_| ()))
}
