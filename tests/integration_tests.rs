//! Integration tests for logger registry
//!
//! These tests verify:
//! - Registry identity and the global registry surface
//! - Level filtering and enable/disable by name
//! - Appender management on shared loggers
//! - Contextual loggers
//! - File and console output
//! - Display-name alignment

use parking_lot::Mutex;
use rust_logger_registry::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
use rust_logger_registry::core::log_context::{FieldValue, LogContext};
use rust_logger_registry::core::log_level::LogLevel;
use rust_logger_registry::core::log_record::LogRecord;
use rust_logger_registry::core::logger::Logger;
use rust_logger_registry::core::registry::Registry;
use rust_logger_registry::{Appender, LoggerError};
use std::fs;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Tests touching the global registry run one at a time
static GLOBAL_GUARD: Mutex<()> = Mutex::new(());

struct TestAppender {
    count: AtomicUsize,
    error_count: AtomicUsize,
}

impl TestAppender {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
            error_count: AtomicUsize::new(0),
        })
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Appender for TestAppender {
    fn append(&self, record: &LogRecord) -> rust_logger_registry::Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        if record.level >= LogLevel::Warn {
            self.error_count.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn id(&self) -> &str {
        "rust_logger_registry/test"
    }
}

fn quiet_registry() -> Registry {
    Registry::builder().without_console().build()
}

#[test]
fn test_global_registry_surface() {
    let _guard = GLOBAL_GUARD.lock();
    rust_logger_registry::reset();

    let logger = rust_logger_registry::get_logger("logger");
    let another = rust_logger_registry::get_logger("another");
    assert!(!Arc::ptr_eq(&logger, &another));
    assert!(Arc::ptr_eq(&logger, &rust_logger_registry::get_logger("logger")));

    let default = rust_logger_registry::default_logger();
    assert_eq!(default.key(), rust_logger_registry::DEFAULT_LOGGER_NAME);
    assert_eq!(default.min_level(), LogLevel::Debug);
    assert_eq!(
        default.appender_ids(),
        vec![rust_logger_registry::appenders::CONSOLE_APPENDER_ID.to_string()]
    );

    assert!(rust_logger_registry::disable("logger"));
    assert!(!logger.is_enabled());
    assert!(rust_logger_registry::enable("logger"));
    assert!(logger.is_enabled());

    rust_logger_registry::reset();
    assert!(!Arc::ptr_eq(&logger, &rust_logger_registry::get_logger("logger")));
    rust_logger_registry::reset();
}

#[test]
fn test_global_default_enable_disable_appender() {
    let _guard = GLOBAL_GUARD.lock();
    rust_logger_registry::reset();

    let default = rust_logger_registry::default_logger();
    default.disable_id(rust_logger_registry::appenders::CONSOLE_APPENDER_ID);

    let ta = TestAppender::new();
    let old_count = default.appender_count();
    default.enable(ta.clone());
    assert_eq!(old_count + 1, default.appender_count());

    default.info("some msg");
    default.info("some msg");
    assert_eq!(ta.count(), 2);

    default.disable("rust_logger_registry/test");
    assert_eq!(old_count, default.appender_count());
    default.info("some msg");
    assert_eq!(ta.count(), 2);

    rust_logger_registry::reset();
}

#[test]
fn test_log_calls_reach_appender() {
    let registry = quiet_registry();
    let logger = registry.get("app");
    let ta = TestAppender::new();
    logger.enable(ta.clone());

    logger.debug("some msg");
    logger.debug("some msg");
    logger.info("some msg");
    logger.info("some msg");
    logger.warn("some msg");
    logger.warn("some msg");
    logger.error("some msg");
    logger.error("some msg");
    assert!(logger.panic("some msg").is_err());
    assert!(logger.panic("some msg").is_err());

    assert_eq!(ta.count(), 10);
    assert_eq!(ta.error_count.load(Ordering::SeqCst), 6);
}

#[test]
fn test_log_calls_with_level() {
    let registry = quiet_registry();
    let logger = registry.get("app");
    let ta = TestAppender::new();
    logger.enable(ta.clone());

    logger.set_min_level(LogLevel::Warn);
    for _ in 0..2 {
        logger.debug("some msg");
        logger.info("some msg");
        logger.warn("some msg");
        logger.error("some msg");
    }
    assert_eq!(ta.count(), 4);
}

#[test]
fn test_disable_by_name_suppresses_until_enabled() {
    let registry = quiet_registry();
    let logger = registry.get("github.com/someuser/somelib");
    let ta = TestAppender::new();
    logger.enable(ta.clone());

    logger.info("before");
    assert_eq!(ta.count(), 1);

    registry.disable("github.com/someuser/somelib");
    for _ in 0..5 {
        logger.error("while disabled");
    }
    assert_eq!(ta.count(), 1);

    registry.enable("github.com/someuser/somelib");
    logger.info("after");
    assert_eq!(ta.count(), 2);
}

#[test]
fn test_unknown_name_is_not_fatal() {
    let memory = Arc::new(MemoryAppender::new());
    let registry = Registry::builder().console(memory.clone()).build();

    assert!(!registry.disable("missing"));
    assert_eq!(memory.len(), 1);
    assert_eq!(memory.records()[0].level, LogLevel::Warn);
}

#[test]
fn test_same_appender_twice_disable_by_id() {
    let registry = quiet_registry();
    let logger = registry.get("dup");
    let ta = TestAppender::new();

    logger.enable(ta.clone());
    logger.enable(ta.clone());
    logger.info("msg");
    assert_eq!(ta.count(), 2);

    assert!(logger.disable_id(ta.id()));
    logger.info("msg");
    assert_eq!(ta.count(), 3);

    assert!(logger.disable_appender(&ta));
    logger.info("msg");
    assert_eq!(ta.count(), 3);
    assert!(!logger.disable_appender(&ta));
}

#[test]
fn test_contextual_logger() {
    let registry = quiet_registry();
    let logger = registry.get("request");
    let memory = Arc::new(MemoryAppender::new());
    logger.enable(memory.clone());

    let contextual = logger
        .copy()
        .with_context(LogContext::new().with_field("k", 1));

    assert!(logger.context().get("k").is_none());
    assert_eq!(contextual.context().get("k"), Some(&FieldValue::Int(1)));
    assert_eq!(contextual.appender_count(), logger.appender_count());

    contextual.enable(TestAppender::new());
    assert_eq!(contextual.appender_count(), logger.appender_count() + 1);

    contextual.info("from contextual");
    logger.info("from original");

    let records = memory.records();
    assert_eq!(records[0].context.get("k"), Some(&FieldValue::Int(1)));
    assert!(records[1].context.is_empty());

    // The copy is not registered
    assert!(Arc::ptr_eq(&logger, &registry.get("request")));
}

#[test]
fn test_file_appender_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let registry = quiet_registry();
    let logger = registry.get("application");
    let appender: Arc<dyn Appender> =
        Arc::new(FileAppender::new(&log_file).expect("Failed to create appender"));
    logger.enable(appender.clone());
    logger.set_context(LogContext::new().with_field("user_id", "12345"));

    logger.error("log from application logger");
    logger
        .log_with_data(LogLevel::Warn, "with data", vec![FieldValue::from(3i64)])
        .unwrap();

    logger.disable(&appender);
    logger.info("not written");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: LogRecord = serde_json::from_str(lines[0]).expect("valid JSON line");
    assert_eq!(first.message, "log from application logger");
    assert_eq!(first.level, LogLevel::Error);
    assert_eq!(first.pid, std::process::id());
    assert_eq!(first.logger, "application");
    assert!(content.contains("user_id"));

    let second: LogRecord = serde_json::from_str(lines[1]).expect("valid JSON line");
    assert_eq!(second.data, vec![FieldValue::Int(3)]);
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("injection_test.log");

    let logger = Logger::builder()
        .name("injection")
        .appender(FileAppender::new(&log_file).expect("Failed to create appender"))
        .build();

    logger.info("User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1, "Log should be a single line, not multiple");
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_console_columns_align() {
    let buffer = SharedBuffer::default();
    let console = Arc::new(ConsoleAppender::with_colors(false).with_writer(buffer.clone()));
    let registry = Registry::builder().console(console).build();

    let app = registry.get("app");
    let lib = registry.get("github.com/ivpusic/golog");
    app.info("first");
    lib.info("second");
    registry.default_logger().info("third");

    let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("app         "));
    assert!(lines[1].starts_with("git/ivp/gol "));
    assert!(lines[2].starts_with("default     "));
    assert!(lines[0].contains("♥[INFO] ▶ first"));
}

#[test]
fn test_fatal_error_carries_message() {
    let registry = quiet_registry();
    let logger = registry.get("fatal");
    let memory = Arc::new(MemoryAppender::new());
    logger.enable(memory.clone());

    let err = logger.panic("cannot continue").unwrap_err();
    assert!(matches!(err, LoggerError::Fatal { ref logger, .. } if logger == "fatal"));
    assert_eq!(memory.messages(), vec!["cannot continue".to_string()]);
}
