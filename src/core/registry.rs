//! Process-wide directory of named loggers
//!
//! The registry maps names to [`Logger`] instances. Asking for a name twice
//! returns the same instance, so unrelated parts of a program can share a
//! logger knowing only its name. Every registered logger gets its display
//! name normalized, and the whole fleet is realigned when a new name widens
//! the shared column.
//!
//! A default logger is registered under [`DEFAULT_LOGGER_NAME`] when the
//! registry is created; the registry reports its own warnings through it.

use super::{
    appender::Appender,
    log_level::LogLevel,
    logger::{Logger, DEFAULT_LOGGER_NAME},
    name_normalizer::{NameNormalizer, DEFAULT_MAX_WIDTH, DEFAULT_TARGET_WIDTH},
};
use crate::appenders::ConsoleAppender;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

struct RegistryState {
    loggers: HashMap<String, Arc<Logger>>,
    default: Arc<Logger>,
    normalizer: NameNormalizer,
}

/// Name to logger directory.
///
/// Lookups, inserts and the shared target width are serialized behind one
/// lock, so two threads registering different names can never both claim
/// the widest name and the same name is never registered twice.
pub struct Registry {
    config: RegistryConfig,
    state: Mutex<RegistryState>,
}

/// Settings a registry applies to the loggers it creates
struct RegistryConfig {
    default_level: LogLevel,
    target_width: usize,
    max_width: usize,
    console: Option<Arc<dyn Appender>>,
}

impl RegistryConfig {
    fn new_logger(&self, name: &str) -> Arc<Logger> {
        let logger = Logger::new(name);
        logger.set_min_level(self.default_level);
        if let Some(console) = &self.console {
            logger.enable(Arc::clone(console));
        }
        Arc::new(logger)
    }

    fn fresh_state(&self) -> RegistryState {
        let mut normalizer = NameNormalizer::with_widths(self.target_width, self.max_width);
        let default = self.new_logger(DEFAULT_LOGGER_NAME);
        default.set_display_name(normalizer.normalize(DEFAULT_LOGGER_NAME));

        let mut loggers = HashMap::new();
        loggers.insert(DEFAULT_LOGGER_NAME.to_string(), Arc::clone(&default));

        RegistryState {
            loggers,
            default,
            normalizer,
        }
    }
}

impl Registry {
    /// Registry with a shared console appender and default widths.
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Return the logger registered under `name`, creating it on first use.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        let mut state = self.state.lock();
        if let Some(logger) = state.loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = self.config.new_logger(name);
        let width_before = state.normalizer.target_width();
        logger.set_display_name(state.normalizer.normalize(name));
        state.loggers.insert(name.to_string(), Arc::clone(&logger));

        if state.normalizer.target_width() > width_before {
            Self::realign(&mut state);
        }

        logger
    }

    /// Re-run normalization over every registered logger's current display
    /// name so all of them share the new target width.
    fn realign(state: &mut RegistryState) {
        let RegistryState {
            loggers,
            normalizer,
            ..
        } = state;

        for logger in loggers.values() {
            let display = normalizer.normalize(&logger.name());
            logger.set_display_name(display);
        }
    }

    /// The logger registered under [`DEFAULT_LOGGER_NAME`].
    pub fn default_logger(&self) -> Arc<Logger> {
        Arc::clone(&self.state.lock().default)
    }

    /// Turn the logger registered under `name` on.
    ///
    /// An unknown name is reported as a warning through the default logger
    /// and otherwise ignored. Returns whether a logger was found.
    pub fn enable(&self, name: &str) -> bool {
        self.set_enabled(name, true)
    }

    /// Turn the logger registered under `name` off. See [`enable`](Self::enable).
    pub fn disable(&self, name: &str) -> bool {
        self.set_enabled(name, false)
    }

    fn set_enabled(&self, name: &str, enabled: bool) -> bool {
        // Warn after releasing the lock; appenders may use the registry
        let (target, default) = {
            let state = self.state.lock();
            (state.loggers.get(name).cloned(), Arc::clone(&state.default))
        };

        match target {
            Some(logger) => {
                logger.set_enabled(enabled);
                true
            }
            None => {
                let action = if enabled { "enable" } else { "disable" };
                default.warnf(format_args!(
                    "Cannot {} logger '{}': no logger registered under that name",
                    action, name
                ));
                false
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.state.lock().loggers.contains_key(name)
    }

    /// Number of registered loggers, the default one included.
    pub fn len(&self) -> usize {
        self.state.lock().loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().loggers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.lock().loggers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Current shared display-name width.
    pub fn target_width(&self) -> usize {
        self.state.lock().normalizer.target_width()
    }

    /// Drop every registered logger and start over with a fresh default
    /// logger and the initial target width.
    ///
    /// Loggers handed out before the reset keep working but are no longer
    /// reachable by name.
    pub fn reset(&self) {
        let fresh = self.config.fresh_state();
        *self.state.lock() = fresh;
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Registry`]
///
/// # Example
/// ```
/// use rust_logger_registry::prelude::*;
///
/// let registry = Registry::builder()
///     .default_level(LogLevel::Info)
///     .without_console()
///     .build();
///
/// let logger = registry.get("worker");
/// assert_eq!(logger.min_level(), LogLevel::Info);
/// assert_eq!(logger.appender_count(), 0);
/// ```
pub struct RegistryBuilder {
    default_level: LogLevel,
    target_width: usize,
    max_width: usize,
    console: Option<Arc<dyn Appender>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            default_level: LogLevel::Debug,
            target_width: DEFAULT_TARGET_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            console: Some(Arc::new(ConsoleAppender::new())),
        }
    }

    /// Minimum level of newly created loggers
    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn target_width(mut self, width: usize) -> Self {
        self.target_width = width;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Appender attached to every new logger in place of the stdout console
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, appender: Arc<dyn Appender>) -> Self {
        self.console = Some(appender);
        self
    }

    /// New loggers start without any appender
    #[must_use = "builder methods return a new value"]
    pub fn without_console(mut self) -> Self {
        self.console = None;
        self
    }

    pub fn build(self) -> Registry {
        let config = RegistryConfig {
            default_level: self.default_level,
            target_width: self.target_width,
            max_width: self.max_width,
            console: self.console,
        };
        let state = config.fresh_state();
        Registry {
            config,
            state: Mutex::new(state),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Logger registered under `name` in the global registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    Registry::global().get(name)
}

/// Enable a logger of the global registry by name.
pub fn enable(name: &str) -> bool {
    Registry::global().enable(name)
}

/// Disable a logger of the global registry by name.
pub fn disable(name: &str) -> bool {
    Registry::global().disable(name)
}

/// The global registry's default logger.
pub fn default_logger() -> Arc<Logger> {
    Registry::global().default_logger()
}

/// Reset the global registry. Meant for test isolation.
pub fn reset() {
    Registry::global().reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    fn quiet_registry() -> (Registry, Arc<MemoryAppender>) {
        let memory = Arc::new(MemoryAppender::new());
        let registry = Registry::builder().console(memory.clone()).build();
        (registry, memory)
    }

    #[test]
    fn test_default_logger_is_registered() {
        let (registry, _) = quiet_registry();
        let default = registry.default_logger();

        assert!(registry.contains(DEFAULT_LOGGER_NAME));
        assert!(Arc::ptr_eq(&default, &registry.get(DEFAULT_LOGGER_NAME)));
        assert_eq!(default.min_level(), LogLevel::Debug);
        assert_eq!(default.appender_count(), 1);
        assert_eq!(default.name(), "default");
    }

    #[test]
    fn test_get_is_idempotent() {
        let (registry, _) = quiet_registry();

        let logger = registry.get("logger");
        let another = registry.get("another");
        assert!(!Arc::ptr_eq(&logger, &another));

        assert!(Arc::ptr_eq(&logger, &registry.get("logger")));
        assert!(Arc::ptr_eq(&another, &registry.get("another")));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_new_logger_defaults() {
        let (registry, memory) = quiet_registry();
        let logger = registry.get("app");

        assert_eq!(logger.key(), "app");
        assert_eq!(logger.name(), "app    ");
        assert!(logger.is_enabled());

        logger.debug("hello");
        assert_eq!(memory.messages(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_longer_name_realigns_fleet() {
        let (registry, _) = quiet_registry();
        let app = registry.get("app");
        let default = registry.default_logger();

        let lib = registry.get("github.com/ivpusic/golog");
        assert_eq!(registry.target_width(), 11);
        assert_eq!(lib.name(), "git/ivp/gol");
        assert_eq!(app.name(), "app        ");
        assert_eq!(default.name(), "default    ");

        let later = registry.get("db");
        assert_eq!(later.name().len(), 11);
    }

    #[test]
    fn test_disable_and_enable_by_name() {
        let (registry, memory) = quiet_registry();
        let logger = registry.get("worker");

        assert!(registry.disable("worker"));
        logger.info("suppressed");
        logger.error("suppressed");
        assert!(memory.is_empty());

        assert!(registry.enable("worker"));
        logger.info("delivered");
        assert_eq!(memory.messages(), vec!["delivered".to_string()]);
    }

    #[test]
    fn test_unknown_name_warns_through_default() {
        let (registry, memory) = quiet_registry();

        assert!(!registry.disable("nobody"));
        assert!(!registry.enable("nobody"));

        let records = memory.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[0].logger, DEFAULT_LOGGER_NAME);
        assert!(records[0].message.contains("Cannot disable logger 'nobody'"));
        assert!(records[1].message.contains("Cannot enable logger 'nobody'"));
        assert!(!registry.contains("nobody"));
    }

    #[test]
    fn test_reset() {
        let (registry, _) = quiet_registry();
        let old_default = registry.default_logger();
        registry.get("github.com/ivpusic/golog");
        assert_eq!(registry.len(), 2);

        registry.reset();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.target_width(), DEFAULT_TARGET_WIDTH);
        assert!(!Arc::ptr_eq(&old_default, &registry.default_logger()));
    }

    #[test]
    fn test_builder_widths() {
        let registry = Registry::builder()
            .without_console()
            .target_width(11)
            .build();

        assert_eq!(registry.get("github.com/ivpusic/golog").name(), "git/ivp/gol");
        assert_eq!(registry.default_logger().name(), "default    ");
        assert_eq!(registry.target_width(), 11);
    }

    #[test]
    fn test_concurrent_first_requests() {
        let (registry, _) = quiet_registry();
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get("shared/logger/name"))
            })
            .collect();

        let loggers: Vec<Arc<Logger>> = handles
            .into_iter()
            .map(|h| h.join().expect("Thread panicked"))
            .collect();

        for logger in &loggers[1..] {
            assert!(Arc::ptr_eq(&loggers[0], logger));
        }
        assert_eq!(registry.len(), 2);
    }
}
