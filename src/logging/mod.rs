// Logging setup
//
// Diagnostics go to stderr through tracing; stdout is reserved for the
// path announcements build scripts read.

use tracing_subscriber::EnvFilter;

use crate::config::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A subscriber may already be installed when embedded in a larger tool
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
