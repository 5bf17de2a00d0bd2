//! Contextual logging example
//!
//! Demonstrates per-request loggers that carry key/value context, plus a
//! custom appender.
//!
//! Run with: cargo run --example contextual_logging

use rust_logger_registry::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts records that carry a `request_id`
#[derive(Default)]
struct RequestCounter {
    seen: AtomicUsize,
}

impl Appender for RequestCounter {
    fn append(&self, record: &LogRecord) -> Result<()> {
        if record.context.get("request_id").is_some() {
            self.seen.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    fn id(&self) -> &str {
        "demo/request_counter"
    }
}

fn handle_request(base: &Logger, request_id: &str, user: &str) {
    let logger = base.copy().with_context(
        LogContext::new()
            .with_field("request_id", request_id)
            .with_field("user", user),
    );

    logger.info("Request received");
    rust_logger_registry::debug!(logger, "Context: {}", logger.context());
    logger.info("Request completed");
}

fn main() -> Result<()> {
    println!("=== Rust Logger Registry - Contextual Logging Example ===\n");

    let http = get_logger("http");
    let counter = Arc::new(RequestCounter::default());
    http.enable(counter.clone());

    println!("1. Requests with bound context:");
    handle_request(&http, "req-001", "alice");
    handle_request(&http, "req-002", "bob");

    println!("\n2. The shared logger has no context of its own:");
    http.info("Server idle");

    println!(
        "\n{} records carried a request_id",
        counter.seen.load(Ordering::Relaxed)
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
