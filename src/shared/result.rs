/// Crate-wide result type.
///
/// Domain failures are raised as `FlowError` and carried inside
/// `anyhow::Error`, so callers can `downcast_ref::<FlowError>()` when they
/// need to tell a recoverable failure from a fatal one.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
