//! Console appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use chrono::Local;
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

pub const CONSOLE_APPENDER_ID: &str = "rust_logger_registry/appender/console";

const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Writes one line per record:
/// `<logger-name> <HH:MM:SS> <icon>[<ABBR>] ▶ <message>`.
///
/// The logger name is printed in cyan and the level marker in the level's
/// color. Output goes to stdout unless redirected with
/// [`with_writer`](Self::with_writer).
pub struct ConsoleAppender {
    use_colors: bool,
    time_format: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            writer: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Send output somewhere other than stdout
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_registry::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_colors(false).with_writer(std::io::stderr());
    /// ```
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Mutex::new(Box::new(writer));
        self
    }

    /// strftime-compatible format for the time column
    #[must_use]
    pub fn with_time_format(mut self, format_str: &str) -> Self {
        self.time_format = format_str.to_string();
        self
    }

    pub(crate) fn format_line(&self, record: &LogRecord) -> String {
        let time = record
            .timestamp
            .with_timezone(&Local)
            .format(&self.time_format)
            .to_string();
        let marker = format!("{}[{}]", record.level.icon(), record.level.abbrev());

        if self.use_colors {
            format!(
                "{} {} {} ▶ {}",
                record.logger_name.cyan(),
                time,
                marker.color(record.level.color_code()),
                record.message
            )
        } else {
            format!(
                "{} {} {} ▶ {}",
                record.logger_name, time, marker, record.message
            )
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let line = self.format_line(record);
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|e| LoggerError::io_operation("writing to console", "write failed", e))
    }

    fn id(&self) -> &str {
        CONSOLE_APPENDER_ID
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}
