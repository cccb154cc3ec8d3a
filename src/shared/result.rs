/// Type alias for Result with anyhow::Error as the error type.
/// Keeps error handling uniform across the CLI, use case and adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
