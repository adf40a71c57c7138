//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing to the destination
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error for a `*j` payload
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level text that does not name a severity
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Numeric severity outside the closed set
    #[error("unrecognized severity: {0}")]
    UnrecognizedSeverity(u8),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(text: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(text.into())
    }
}
