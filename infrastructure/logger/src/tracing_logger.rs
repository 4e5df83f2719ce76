use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Tracing adapter of the domain logging port. Subscriber installation is
/// the embedding application's job.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "SupplyCart -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "SupplyCart -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "SupplyCart -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "SupplyCart -- ", "{}", message);
    }
}
