//! Error types for sink implementations
//!
//! Sinks report failures through [`SinkError`]; the logger core itself has no
//! return channel for them. A failed write or flush is swallowed at dispatch
//! and never surfaces to the logging call site.

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink exists but cannot currently accept output
    #[error("sink '{name}' unavailable: {message}")]
    Unavailable { name: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SinkError {
    /// Create an unavailable-sink error
    pub fn unavailable(name: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::Unavailable {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SinkError::Other(msg.into())
    }
}
