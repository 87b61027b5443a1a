//! Process plumbing shared by the three binaries.

use std::error::Error;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::AdminError;

/// Install the log subscriber. `RUST_LOG` selects the filter; the default is `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Turn a command result into the process exit code.
///
/// On failure the error and its source chain go to stderr and the exit code is 1.
pub fn finish(result: Result<(), AdminError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", render_failure(&e));
            ExitCode::FAILURE
        }
    }
}

/// Format an error followed by one `Caused by:` line per source.
fn render_failure(e: &dyn Error) -> String {
    let mut rendered = format!("Error: {}\n", e);

    let mut source = e.source();
    while let Some(err) = source {
        rendered.push_str(&format!("  Caused by: {}\n", err));
        source = err.source();
    }

    rendered
}
