//! CLI command definitions, argument parsing, and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

/// About text with ANSI styling for clap help output.
pub const ABOUT_STYLED: &str =
    "\x1b[1muserpick\x1b[0m \x1b[2m· load users from a JSON endpoint and pick one\x1b[0m";

/// Build the log filter: `--verbose` wins, then `RUST_LOG`, then warnings only.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("warn,userpick=debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global tracing subscriber, writing to stderr.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
