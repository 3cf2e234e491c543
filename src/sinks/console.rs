//! Console sink implementation

use crate::core::{Result, Severity, Sink};
use colored::Colorize;
use std::io::Write;

/// Sink writing to standard output.
///
/// With colors enabled, any written token that is exactly a severity name is
/// colorized; the formatter always writes the severity name as one whole
/// token, so rendered records get colored level fields without the sink
/// having to parse lines.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_str(&mut self, s: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.use_colors {
            // Exact match only: severity names arrive as whole tokens.
            let level = Severity::CALLABLE.iter().find(|sev| sev.as_str() == s);
            if let Some(severity) = level {
                write!(stdout, "{}", s.color(severity.color_code()))?;
                return Ok(());
            }
        }
        stdout.write_all(s.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_flush_do_not_fail() {
        let mut sink = ConsoleSink::with_colors(false);
        sink.write_str("INFO").unwrap();
        sink.write_str("\t[TEST]\tconsole sink check\n").unwrap();
        sink.flush().unwrap();
    }

    #[test]
    fn test_colored_severity_token() {
        let mut sink = ConsoleSink::new();
        sink.write_str("WARN").unwrap();
        sink.write_str("\t[TEST]\tstill fine\n").unwrap();
        sink.flush().unwrap();
    }
}
