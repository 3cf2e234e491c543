//! Sink trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Terminator appended after every rendered record.
pub const LINE_TERMINATOR: &str = "\n";

/// An output destination for rendered log text.
///
/// The trait is the minimal capability a destination must offer: accept
/// character data and force buffered output out. Writes and flushes are
/// blocking; a hung sink hangs the caller. Retry policy, if any, belongs to
/// the implementation, never to the dispatch core.
pub trait Sink {
    fn write_str(&mut self, s: &str) -> Result<()>;

    fn write_char(&mut self, c: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    /// Write any primitive numeric, character, or text value.
    fn write_value(&mut self, value: &dyn fmt::Display) -> Result<()> {
        self.write_str(&value.to_string())
    }

    /// Write a value followed by the line terminator.
    fn write_line(&mut self, value: &dyn fmt::Display) -> Result<()> {
        self.write_value(value)?;
        self.write_str(LINE_TERMINATOR)
    }

    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}

/// Shared handle to a sink.
///
/// The logger holds handles, never the sinks themselves: the external owner
/// of the physical device keeps its own clone and controls the sink's
/// lifetime. The mutex is the sharing cell, not a concurrency claim — the
/// core is single-context by design and callers needing concurrent logging
/// must synchronize externally.
pub type SinkHandle = Arc<Mutex<dyn Sink>>;

/// Wrap a sink into a [`SinkHandle`] for attachment to a logger.
pub fn sink_handle<S: Sink + 'static>(sink: S) -> SinkHandle {
    Arc::new(Mutex::new(sink))
}
