//! Basic logger usage example
//!
//! Demonstrates named loggers from the global registry, level filtering and
//! turning a library's logger off by name.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_registry::prelude::*;
use rust_logger_registry::{debug, info};

fn main() -> Result<()> {
    println!("=== Rust Logger Registry - Basic Usage Example ===\n");

    // Loggers from the global registry start with the console appender
    let app = get_logger("app");
    let lib = get_logger("github.com/someuser/somelib");

    println!("1. Logging at different levels:");
    app.debug("This is a debug message");
    app.info("This is an info message");
    app.warn("This is a warning message");
    app.error("This is an error message");
    lib.info("Library names are abbreviated to keep columns aligned");

    println!("\n2. Format arguments:");
    let port = 8080;
    info!(app, "Server listening on port {}", port);
    debug!(lib, "some {} number {}", "cool", 4);

    println!("\n3. Changing the minimum level:");
    app.set_min_level(LogLevel::Warn);
    app.info("Info message (hidden)");
    app.warn("Warning message (visible)");

    println!("\n4. Disabling a library's logger by name:");
    rust_logger_registry::disable("github.com/someuser/somelib");
    lib.error("Error from a disabled logger (hidden)");
    rust_logger_registry::enable("github.com/someuser/somelib");
    lib.info("Logger enabled again");

    println!("\n5. Panic level hands control back to the caller:");
    if let Err(e) = app.panic("Unrecoverable condition") {
        println!("   caller received: {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
