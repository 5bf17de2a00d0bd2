//! Appender implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleAppender, CONSOLE_APPENDER_ID};
pub use file::{FileAppender, FILE_APPENDER_ID};
pub use memory::{MemoryAppender, MEMORY_APPENDER_ID};

// Re-export the trait next to its implementations
pub use crate::core::Appender;
