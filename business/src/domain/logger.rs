/// Logging port used by the application layer.
///
/// Use cases receive an `Arc<dyn Logger>` so they stay independent of the
/// concrete tracing backend wired in by the binary.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
