//! `roppou` binary: resolve citations from the command line.

use roppou_resolver::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries the reply text; diagnostics go to stderr at warn unless RUST_LOG is set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
