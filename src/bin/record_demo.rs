use std::{io, process::ExitCode};

use recordcursor::{Iterable, driver};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();

    let collection = driver::sample_collection();
    let mut iter = collection.create_iterator();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match driver::print_records(&mut *iter, &mut out) {
        Ok(count) => {
            tracing::debug!(records = count, "traversal complete");
            ExitCode::SUCCESS
        }
        Err(status) => {
            tracing::error!(%status, "failed to write records");
            ExitCode::FAILURE
        }
    }
}

// Diagnostics go to stderr so stdout carries only the record lines.
fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
