//! In-memory sink
//!
//! Captures everything written to it in a shared buffer. Clones share the
//! same buffer, so a clone kept outside the logger can inspect what the
//! logger dispatched. This is the test double for the fan-out properties,
//! and doubles as a capture sink for applications that want one.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
    flushes: Arc<AtomicUsize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, terminators included.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Captured output split into lines, terminators stripped.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    /// How many times this sink has been flushed.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
        self.flushes.store(0, Ordering::Relaxed);
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.buffer.lock().push_str(s);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_buffer() {
        let mut sink = MemorySink::new();
        let view = sink.clone();

        sink.write_str("shared").unwrap();
        sink.flush().unwrap();

        assert_eq!(view.contents(), "shared");
        assert_eq!(view.flush_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut sink = MemorySink::new();
        sink.write_str("old\n").unwrap();
        sink.flush().unwrap();
        sink.clear();
        assert_eq!(sink.contents(), "");
        assert_eq!(sink.flush_count(), 0);
    }
}
