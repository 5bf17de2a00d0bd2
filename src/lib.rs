//! # Rust Logger Registry
//!
//! Named, per-process loggers that fan records out to pluggable appenders.
//!
//! ## Features
//!
//! - **Named Loggers**: one instance per name, shared through a registry
//! - **Level Filtering**: per-logger minimum level and on/off switch
//! - **Multiple Appenders**: console, file, in-memory, and custom appenders
//! - **Contextual Loggers**: copy a logger and bind key/value context to it
//! - **Aligned Output**: logger names are normalized to a common console width
//!
//! ```
//! use rust_logger_registry::prelude::*;
//!
//! let registry = Registry::builder().without_console().build();
//! let logger = registry.get("github.com/acme/billing");
//!
//! let memory = std::sync::Arc::new(MemoryAppender::new());
//! logger.enable(memory.clone());
//! logger.set_min_level(LogLevel::Info);
//!
//! logger.debug("filtered out");
//! rust_logger_registry::info!(logger, "invoice {} sent", 42);
//!
//! assert_eq!(memory.messages(), vec!["invoice 42 sent".to_string()]);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::registry::{default_logger, get_logger};
    pub use crate::core::{
        Appender, DisableTarget, FieldValue, LogContext, LogLevel, LogRecord, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, NameNormalizer, Registry, RegistryBuilder,
        Result,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use crate::core::registry::{default_logger, disable, enable, get_logger, reset};
pub use crate::core::{
    Appender, DisableTarget, FieldValue, LogContext, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, NameNormalizer, Registry, RegistryBuilder, Result,
    DEFAULT_LOGGER_NAME,
};
