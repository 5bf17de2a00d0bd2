//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod name_normalizer;
pub mod registry;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{DisableTarget, Logger, LoggerBuilder, DEFAULT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
pub use name_normalizer::{NameNormalizer, DEFAULT_MAX_WIDTH, DEFAULT_TARGET_WIDTH};
pub use registry::{Registry, RegistryBuilder};
