//! Self-rendering tags and messages
//!
//! Tags and messages can be any type implementing `Render`; plain `Display`
//! types go through the `Plain` adapter.
//!
//! Run with: cargo run --example custom_render

use taglog::prelude::*;

/// A reading that writes itself into a sink piece by piece.
struct Reading {
    channel: u8,
    millivolts: u32,
}

impl Render for Reading {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
        let mut written = 0;
        written += "ch".render(sink)?;
        written += self.channel.render(sink)?;
        written += " = ".render(sink)?;
        written += self.millivolts.render(sink)?;
        written += "mV".render(sink)?;
        Ok(written)
    }
}

fn main() {
    let logger = Logger::builder()
        .threshold(Severity::All)
        .sink(ConsoleSink::new())
        .build();

    // Plain text tags and messages
    logger.info("ADC", "calibration done");

    // A numeric message
    logger.debug("ADC", 4096u32);

    // A custom self-rendering message
    logger.warn("ADC", Reading { channel: 3, millivolts: 3412 });

    // Any Display type through the Plain adapter
    logger.info("NET", Plain(std::net::Ipv4Addr::new(10, 0, 0, 7)));
}
