//! Log record structure

use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One emitted event.
///
/// Built once per emission and handed by reference to every attached
/// appender; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub level: LogLevel,
    /// Extra values passed alongside the message
    pub data: Vec<FieldValue>,
    #[serde(rename = "ctx")]
    pub context: LogContext,
    pub pid: u32,
    /// Name the emitting logger was created with
    pub logger: String,
    /// Normalized display name of the emitting logger at emission time
    pub logger_name: String,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a record always renders on a single line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: Self::sanitize_message(message.as_ref()),
            level,
            data: Vec::new(),
            context: LogContext::new(),
            pid: std::process::id(),
            logger: String::new(),
            logger_name: String::new(),
        }
    }

    pub fn with_data(mut self, data: Vec<FieldValue>) -> Self {
        self.data = data;
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_logger(mut self, key: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.logger = key.into();
        self.logger_name = display_name.into();
        self
    }
}
