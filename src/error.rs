//! Error types for the conference companion.

/// Top-level error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error (unreadable or malformed config file).
    #[error("config error: {0}")]
    Config(String),

    /// Static content loading error (anything worse than a missing file).
    #[error("content error: {0}")]
    Content(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
