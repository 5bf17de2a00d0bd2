//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An appender panicked while consuming a record
    #[error("Appender '{id}' panicked: {message}")]
    AppenderPanicked { id: String, message: String },

    /// A PANIC-level record was emitted; the caller is expected to terminate
    #[error("Fatal log from '{logger}': {message}")]
    Fatal { logger: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn appender_panicked(id: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppenderPanicked {
            id: id.into(),
            message: message.into(),
        }
    }

    pub fn fatal(logger: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Fatal {
            logger: logger.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this is the result of a PANIC-level emission
    pub fn is_fatal(&self) -> bool {
        matches!(self, LoggerError::Fatal { .. })
    }
}
