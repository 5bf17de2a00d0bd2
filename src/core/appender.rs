//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A sink that records or forwards log records.
///
/// Appenders are shared between loggers behind `Arc`, so `append` takes
/// `&self`; implementations guard their own writers.
pub trait Appender: Send + Sync {
    /// Consume one record. I/O failures are reported through the result,
    /// never by panicking.
    fn append(&self, record: &LogRecord) -> Result<()>;

    /// Stable identifier of this appender kind, used by `Logger::disable_id`.
    ///
    /// Convention is a path such as `"myorg/mylib/appender/file"`.
    fn id(&self) -> &str;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
