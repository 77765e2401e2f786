use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "storefront";

/// Installs the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter` when the
/// variable is unset or unparsable.
pub fn init(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Forwards domain log lines to `tracing` under the `storefront` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
