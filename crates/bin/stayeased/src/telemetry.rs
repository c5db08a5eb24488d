//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::DEFAULT_LOG_FILTER;

/// Install a `fmt` subscriber filtered by `filter`.
///
/// An unparseable filter falls back to [`DEFAULT_LOG_FILTER`]. Calling this
/// twice is harmless; the second call is ignored.
pub fn init(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), true),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed && invalid {
        tracing::warn!(filter, "invalid log filter, using default");
    }
}
