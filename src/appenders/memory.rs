//! In-memory appender

use crate::core::{Appender, LogRecord, Result};
use parking_lot::Mutex;

pub const MEMORY_APPENDER_ID: &str = "rust_logger_registry/appender/memory";

/// Keeps every record it receives. Handy for tests and for embedding
/// applications that render logs themselves.
pub struct MemoryAppender {
    id: String,
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::with_id(MEMORY_APPENDER_ID)
    }

    /// Use a custom id, so several memory appenders can be told apart
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemoryAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MemoryAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }
}
