/// Logging port for the domain and application layers.
/// Adapters decide the backend; see the infrastructure logger crate.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
