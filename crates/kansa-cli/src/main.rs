//! kansa CLI entry point.
//!
//! Validate a repository as a CI gate:
//! ```bash
//! kansa all --root path/to/repo
//! ```

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    std::process::exit(kansa_cli::main_impl());
}
