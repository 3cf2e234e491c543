//! Network sink for remote log destinations
//!
//! Writes log text to a remote server over TCP. The dispatch core never
//! retries, so reconnection on a dead stream lives here.

use crate::core::{Result, Sink, SinkError};
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Sink that sends log text to a remote TCP endpoint
///
/// # Example
///
/// ```no_run
/// use taglog::prelude::*;
/// use taglog::sinks::TcpSink;
///
/// let sink = TcpSink::new("127.0.0.1:8080")
///     .expect("Failed to connect to log server");
///
/// let logger = Logger::builder()
///     .threshold(Severity::Info)
///     .sink(sink)
///     .build();
///
/// logger.info("NET", "this line goes to 127.0.0.1:8080");
/// ```
pub struct TcpSink {
    stream: Option<TcpStream>,
    address: String,
    reconnect_on_error: bool,
}

impl TcpSink {
    /// Connect to a remote endpoint
    ///
    /// # Arguments
    ///
    /// * `addr` - Socket address (e.g., "localhost:8080", "192.168.1.1:9000")
    ///
    /// # Errors
    ///
    /// Returns error if connection fails
    pub fn new(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        let address = addr.to_string();
        let stream = Self::connect(&address)?;

        Ok(Self {
            stream: Some(stream),
            address,
            reconnect_on_error: true,
        })
    }

    /// Enable or disable automatic reconnection on errors
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    fn connect(address: &str) -> Result<TcpStream> {
        let stream = TcpStream::connect(address)?;

        // Timeouts prevent a dead peer from hanging the caller forever
        stream.set_write_timeout(Some(Duration::from_secs(5)))?;
        stream.set_read_timeout(Some(Duration::from_secs(5)))?;

        // TCP_NODELAY for low-latency delivery of small records
        stream.set_nodelay(true)?;

        Ok(stream)
    }
}

impl Sink for TcpSink {
    fn write_str(&mut self, s: &str) -> Result<()> {
        let result = match self.stream {
            Some(ref mut stream) => stream.write_all(s.as_bytes()),
            None => {
                return Err(SinkError::unavailable(self.name(), "stream not connected"));
            }
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                // Connection lost
                self.stream = None;

                if self.reconnect_on_error {
                    match Self::connect(&self.address) {
                        Ok(mut stream) => {
                            stream.write_all(s.as_bytes())?;
                            self.stream = Some(stream);
                            Ok(())
                        }
                        Err(reconnect_err) => Err(SinkError::unavailable(
                            self.name(),
                            format!("send failed: {} (reconnect: {})", e, reconnect_err),
                        )),
                    }
                } else {
                    Err(e.into())
                }
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut stream) = self.stream {
            stream.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "tcp"
    }
}

impl Drop for TcpSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tcp_sink_creation_fails_without_server() {
        // No server is listening on this port
        let result = TcpSink::new("127.0.0.1:9999");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_without_connection() {
        let mut sink = TcpSink {
            stream: None,
            address: "127.0.0.1:9999".to_string(),
            reconnect_on_error: false,
        };

        let result = sink.write_str("INFO\t[NET]\ttest\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_flush_without_connection_is_harmless() {
        let mut sink = TcpSink {
            stream: None,
            address: "127.0.0.1:9999".to_string(),
            reconnect_on_error: false,
        };

        assert!(sink.flush().is_ok());
    }
}
