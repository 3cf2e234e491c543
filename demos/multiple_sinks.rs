//! Multi-sink fan-out example
//!
//! One record is delivered to the console and a log file, in attachment
//! order, each sink flushed after the write.
//!
//! Run with: cargo run --example multiple_sinks

use taglog::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::builder()
        .threshold(Severity::Debug)
        .sink(ConsoleSink::new())
        .sink(FileSink::new("device.log")?)
        .build();

    logger.info("NET", "link up");
    logger.warn("BAT", "charge at 15%");
    logger.error("SD", "mount failed");

    println!("(the three lines above were also appended to device.log)");
    Ok(())
}
