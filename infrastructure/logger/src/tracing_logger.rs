use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards service log lines to `tracing` under the `product_catalog` target,
/// so `RUST_LOG=product_catalog=debug` selects them.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_catalog", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_catalog", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_catalog", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_catalog", "{}", message);
    }
}
