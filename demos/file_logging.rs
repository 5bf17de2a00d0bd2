//! File logging example
//!
//! Demonstrates logging to both console and a JSON-lines file appender.
//!
//! Run with: cargo run --example file_logging

use rust_logger_registry::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logger Registry - File Logging Example ===\n");

    let logger = get_logger("application");

    // The console appender is already attached; add a file appender
    let file: Arc<dyn Appender> = Arc::new(FileAppender::new("application.log")?);
    logger.enable(file.clone());

    println!("1. Logging to both console and file:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Attaching values to records:");

    for i in 1i64..=5 {
        logger.log_with_data(
            LogLevel::Info,
            "Processing item",
            vec![FieldValue::from(i), FieldValue::from("of 5")],
        )?;
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    println!("\n3. Detaching the file appender:");
    logger.disable(&file);
    logger.info("Console only from here on");

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the JSON log output");

    Ok(())
}
