//! Logging setup.
//!
//! Diagnostics go through `tracing` and are written to stderr; the CLI
//! calls [`init`] once at startup. Progress output is not logged here: the
//! engine reports it through its `Reporter` sink so stdout stays clean for
//! scripting.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `verbose` forces debug-level output; otherwise `RUST_LOG` is honored
/// and defaults to warnings only.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
