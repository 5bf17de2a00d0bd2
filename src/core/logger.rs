//! Named logger implementation

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    log_context::{FieldValue, LogContext},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Name given to loggers built without an explicit one
pub const DEFAULT_LOGGER_NAME: &str = "default";

/// What to remove in [`Logger::disable`].
#[derive(Clone)]
pub enum DisableTarget {
    /// Matches the same instance, or any appender reporting the same id
    Appender(Arc<dyn Appender>),
    /// Matches any appender reporting this id
    Id(String),
}

impl DisableTarget {
    fn matches(&self, entry: &Arc<dyn Appender>) -> bool {
        match self {
            DisableTarget::Appender(appender) => same_appender(appender, entry),
            DisableTarget::Id(id) => entry.id() == id,
        }
    }
}

impl fmt::Debug for DisableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisableTarget::Appender(appender) => {
                f.debug_tuple("Appender").field(&appender.id()).finish()
            }
            DisableTarget::Id(id) => f.debug_tuple("Id").field(id).finish(),
        }
    }
}

impl From<&str> for DisableTarget {
    fn from(id: &str) -> Self {
        DisableTarget::Id(id.to_string())
    }
}

impl From<String> for DisableTarget {
    fn from(id: String) -> Self {
        DisableTarget::Id(id)
    }
}

impl From<Arc<dyn Appender>> for DisableTarget {
    fn from(appender: Arc<dyn Appender>) -> Self {
        DisableTarget::Appender(appender)
    }
}

impl From<&Arc<dyn Appender>> for DisableTarget {
    fn from(appender: &Arc<dyn Appender>) -> Self {
        DisableTarget::Appender(Arc::clone(appender))
    }
}

/// Same instance, or same reported id.
fn same_appender<A: Appender + ?Sized>(target: &Arc<A>, entry: &Arc<dyn Appender>) -> bool {
    Arc::as_ptr(target) as *const () == Arc::as_ptr(entry) as *const ()
        || target.id() == entry.id()
}

/// A named source of log records.
///
/// A logger owns a minimum level, an enabled flag, an ordered list of
/// appenders and a context that is stamped onto every record it emits.
/// All state is behind locks or atomics, so a logger can be shared through
/// `Arc` and mutated while other threads log through it.
///
/// Emission is synchronous: a logging call returns once every attached
/// appender has consumed the record.
pub struct Logger {
    /// Name the logger was created or registered under
    key: String,
    /// Display name, rewritten by the registry for console alignment
    name: RwLock<String>,
    min_level: RwLock<LogLevel>,
    enabled: AtomicBool,
    /// Panic after dispatch when an appender fails
    panic_on_error: AtomicBool,
    appenders: RwLock<Vec<Arc<dyn Appender>>>,
    context: RwLock<LogContext>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create an enabled logger at `Debug` level with no appenders.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let key = name.into();
        Self {
            name: RwLock::new(key.clone()),
            key,
            min_level: RwLock::new(LogLevel::Debug),
            enabled: AtomicBool::new(true),
            panic_on_error: AtomicBool::new(false),
            appenders: RwLock::new(Vec::new()),
            context: RwLock::new(LogContext::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Name this logger was created with (its registry key).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name, padded or abbreviated when registered.
    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    pub(crate) fn set_display_name(&self, name: String) {
        *self.name.write() = name;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn panic_on_error(&self) -> bool {
        self.panic_on_error.load(Ordering::Relaxed)
    }

    pub fn set_panic_on_error(&self, panic_on_error: bool) {
        self.panic_on_error.store(panic_on_error, Ordering::Relaxed);
    }

    pub fn context(&self) -> LogContext {
        self.context.read().clone()
    }

    /// Replace the context stamped onto subsequent records.
    pub fn set_context(&self, context: LogContext) -> &Self {
        *self.context.write() = context;
        self
    }

    /// Consuming form of [`set_context`](Self::set_context), meant to follow
    /// [`copy`](Self::copy).
    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        *self.context.get_mut() = context;
        self
    }

    /// Independent copy of this logger.
    ///
    /// The copy shares appender instances but not the list holding them:
    /// enabling or disabling on one side is not seen by the other. Metrics
    /// start from zero and the copy is not registered anywhere.
    #[must_use]
    pub fn copy(&self) -> Logger {
        Logger {
            key: self.key.clone(),
            name: RwLock::new(self.name()),
            min_level: RwLock::new(self.min_level()),
            enabled: AtomicBool::new(self.is_enabled()),
            panic_on_error: AtomicBool::new(self.panic_on_error()),
            appenders: RwLock::new(self.appenders.read().clone()),
            context: RwLock::new(self.context()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Attach an appender. The same appender may be attached more than once
    /// and then receives every record once per attachment.
    pub fn enable(&self, appender: Arc<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    /// Remove the first attached appender matching `target`.
    ///
    /// Returns whether an appender was removed; no match is a no-op.
    pub fn disable(&self, target: impl Into<DisableTarget>) -> bool {
        let target = target.into();
        self.remove_first(|entry| target.matches(entry))
    }

    /// Remove the first appender that is `appender` or reports its id.
    pub fn disable_appender<A: Appender + ?Sized>(&self, appender: &Arc<A>) -> bool {
        self.remove_first(|entry| same_appender(appender, entry))
    }

    /// Remove the first appender reporting `id`.
    pub fn disable_id(&self, id: &str) -> bool {
        self.remove_first(|entry| entry.id() == id)
    }

    fn remove_first(&self, matches: impl Fn(&Arc<dyn Appender>) -> bool) -> bool {
        let mut appenders = self.appenders.write();
        match appenders.iter().position(matches) {
            Some(index) => {
                appenders.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Ids of attached appenders, in attachment order
    pub fn appender_ids(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|appender| appender.id().to_string())
            .collect()
    }

    /// Whether a record at `level` would currently be emitted.
    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        self.is_enabled() && level >= self.min_level()
    }

    /// Log `message` at `level`.
    ///
    /// Returns `Err(LoggerError::Fatal)` after dispatch when `level` is
    /// `Panic` and the record was emitted.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.emit(level, || message.into(), Vec::new())
    }

    /// Log `message` at `level` with extra values attached to the record.
    pub fn log_with_data(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        data: Vec<FieldValue>,
    ) -> Result<()> {
        self.emit(level, || message.into(), data)
    }

    /// Log preformatted arguments; rendering only happens if the record is emitted.
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(level, || fmt::format(args), Vec::new())
    }

    fn emit(
        &self,
        level: LogLevel,
        message: impl FnOnce() -> String,
        data: Vec<FieldValue>,
    ) -> Result<()> {
        if !self.should_emit(level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let message = message();
        let record = LogRecord::new(level, &message)
            .with_data(data)
            .with_context(self.context())
            .with_logger(self.key.clone(), self.name());

        // Dispatch outside the lock so appenders may call back into this logger
        let appenders = self.appenders.read().clone();
        let failure = Self::dispatch(&appenders, &record, &self.metrics);
        self.metrics.record_emitted();

        if let Some(error) = failure {
            if self.panic_on_error() {
                panic!(
                    "Appender failure on logger '{}' with panic_on_error set: {}",
                    self.key, error
                );
            }
        }

        if level == LogLevel::Panic {
            return Err(LoggerError::fatal(self.key.clone(), message));
        }

        Ok(())
    }

    /// Hand `record` to every appender in order with per-appender panic isolation
    ///
    /// One failing appender never prevents the others from receiving the
    /// record. Returns the first failure, if any.
    fn dispatch(
        appenders: &[Arc<dyn Appender>],
        record: &LogRecord,
        metrics: &LoggerMetrics,
    ) -> Option<LoggerError> {
        let mut first_failure = None;

        for (idx, appender) in appenders.iter().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(record)
            }));

            let error = match append_result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.id(),
                        e
                    );
                    e
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} ({}) panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        appender.id(),
                        panic_msg
                    );
                    LoggerError::appender_panicked(appender.id(), panic_msg)
                }
            };

            metrics.record_appender_failure();
            first_failure.get_or_insert(error);
        }

        first_failure
    }

    /// Flush every attached appender, returning the first error.
    pub fn flush(&self) -> Result<()> {
        let appenders = self.appenders.read().clone();
        let mut result = Ok(());
        for appender in appenders.iter() {
            if let Err(e) = appender.flush() {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        let _ = self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        let _ = self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        let _ = self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        let _ = self.log(LogLevel::Error, message);
    }

    /// Log at `Panic` level.
    ///
    /// Every appender receives the record first; the returned
    /// `LoggerError::Fatal` then tells the caller to terminate. `Ok(())` means
    /// the logger is disabled and nothing was emitted.
    ///
    /// The error carries `message` as given; only the record seen by
    /// appenders has control characters escaped.
    ///
    /// # Example
    ///
    /// ```should_panic
    /// use rust_logger_registry::Logger;
    ///
    /// let logger = Logger::new("app");
    /// logger.panic("unrecoverable state").unwrap();
    /// ```
    pub fn panic(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Panic, message)
    }

    pub fn panic_with_data(&self, message: impl Into<String>, data: Vec<FieldValue>) -> Result<()> {
        self.log_with_data(LogLevel::Panic, message, data)
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        let _ = self.logf(LogLevel::Debug, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        let _ = self.logf(LogLevel::Info, args);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        let _ = self.logf(LogLevel::Warn, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        let _ = self.logf(LogLevel::Error, args);
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.logf(LogLevel::Panic, args)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("key", &self.key)
            .field("name", &self.name())
            .field("min_level", &self.min_level())
            .field("enabled", &self.is_enabled())
            .field("appenders", &self.appender_ids())
            .field("context", &self.context())
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_logger_registry::prelude::*;
///
/// let logger = Logger::builder()
///     .name("worker")
///     .min_level(LogLevel::Info)
///     .appender(MemoryAppender::new())
///     .context(LogContext::new().with_field("shard", 3))
///     .build();
///
/// assert_eq!(logger.appender_count(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: LogLevel,
    appenders: Vec<Arc<dyn Appender>>,
    context: LogContext,
    enabled: bool,
    panic_on_error: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            min_level: LogLevel::Debug,
            appenders: Vec::new(),
            context: LogContext::new(),
            enabled: true,
            panic_on_error: false,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Arc::new(appender));
        self
    }

    /// Add an appender that is also attached elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn panic_on_error(mut self, panic_on_error: bool) -> Self {
        self.panic_on_error = panic_on_error;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name).with_context(self.context);
        logger.set_min_level(self.min_level);
        logger.set_enabled(self.enabled);
        logger.set_panic_on_error(self.panic_on_error);
        for appender in self.appenders {
            logger.enable(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
