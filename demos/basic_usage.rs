//! Basic logger usage example
//!
//! Demonstrates configuring a logger with a console sink and logging at
//! different severities.
//!
//! Run with: cargo run --example basic_usage

use taglog::prelude::*;

fn main() {
    // Create and configure a logger
    let mut logger = Logger::new();
    logger.configure_sink(sink_handle(ConsoleSink::new()), Severity::All);

    // Log messages at different severities
    logger.fatal("MAIN", "This is a fatal message");
    logger.error("MAIN", "This is an error message");
    logger.warn("MAIN", "This is a warning message");
    logger.info("MAIN", "This is an info message");
    logger.debug("MAIN", "This is a debug message");

    // Raise the threshold: anything more verbose than WARN is suppressed
    logger.configure_sink(sink_handle(ConsoleSink::new()), Severity::Warn);
    logger.info("MAIN", "Info message (hidden)");
    logger.debug("MAIN", "Debug message (hidden)");
    logger.warn("MAIN", "Warning message (visible)");
}
