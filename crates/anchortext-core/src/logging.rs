#![forbid(unsafe_code)]

//! Logging facade.
//!
//! Library crates log through `tracing`; nothing here installs a subscriber
//! unless the host asks for one. Binaries enable the `subscriber` feature and
//! call [`init`], which reads its filter from `ANCHORTEXT_LOG`
//! (same syntax as `RUST_LOG`, default `warn`).

pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "ANCHORTEXT_LOG";

/// Filter used when [`LOG_ENV`] is unset or empty.
pub const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter directive using a custom environment lookup.
#[must_use]
pub fn filter_from_env<F>(get_env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_env(LOG_ENV)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Install a global fmt subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "subscriber")]
pub fn init() -> bool {
    use tracing_subscriber::EnvFilter;

    let directive = filter_from_env(|key| std::env::var(key).ok());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
