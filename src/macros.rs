//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a logger followed by `format!`-style arguments. The
//! arguments are passed as `format_args!`, so a call filtered out by level or
//! by a disabled logger never renders its message.
//!
//! # Examples
//!
//! ```
//! use rust_logger_registry::prelude::*;
//! use rust_logger_registry::info;
//!
//! let logger = Logger::new("server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at a given level.
///
/// Evaluates to the `Result` of [`Logger::logf`](crate::Logger::logf), which
/// is `Err(LoggerError::Fatal)` for an emitted `Panic` record.
///
/// # Examples
///
/// ```
/// # use rust_logger_registry::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_logger_registry::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_registry::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_logger_registry::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "some {} number {}", "cool", 4);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a `Panic`-level message.
///
/// Evaluates to `Err(LoggerError::Fatal)` once every appender has the
/// record; propagate it or terminate.
///
/// # Examples
///
/// ```
/// # use rust_logger_registry::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_logger_registry::fatal;
/// let result = fatal!(logger, "Unable to recover from error: {}", "disk full");
/// assert!(result.unwrap_err().is_fatal());
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}
