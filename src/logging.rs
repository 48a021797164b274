//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays reserved for the generated index.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "reaindex=error"
    } else if verbose {
        "reaindex=debug"
    } else {
        "reaindex=warn"
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over the flags
pub fn init_logging(verbose: bool, quiet: bool, use_colors: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(verbose, quiet).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(use_colors)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
