//! Diagnostic logging to stderr

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the filter directive: `RUST_LOG` wins, then the verbosity default
pub fn filter_directive(verbose: bool) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            VERBOSE_LOG_FILTER.into()
        } else {
            DEFAULT_LOG_FILTER.into()
        }
    })
}

/// Install the global subscriber
///
/// Logs go to stderr so stdout carries only passwords. Returns `false` if a
/// subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}
