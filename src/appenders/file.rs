//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const FILE_APPENDER_ID: &str = "rust_logger_registry/appender/file";

/// Appends each record to a file as one line of JSON.
///
/// The file is opened in append-create mode when the appender is built, and
/// synced to disk after every record.
pub struct FileAppender {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = self.file.lock();
        file.write_all(&line)
            .and_then(|_| file.sync_data())
            .map_err(|e| {
                LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
            })
    }

    fn id(&self) -> &str {
        FILE_APPENDER_ID
    }

    fn flush(&self) -> Result<()> {
        self.file.lock().flush()?;
        Ok(())
    }
}
