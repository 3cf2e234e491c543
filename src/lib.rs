//! # taglog
//!
//! A minimal leveled-logging facility for resource-constrained targets:
//! tagged, severity-classified text records fanned out to any number of
//! attached sinks, with a filtered-out call costing a single comparison.
//!
//! ## Features
//!
//! - **Level Filtering**: fixed severity order, pure threshold comparison
//! - **Multiple Sinks**: one record delivered to every attached sink, in order
//! - **Self-rendering Values**: tags and messages can be plain text or any
//!   type that writes itself into a sink
//! - **No Hidden State**: the logger is an explicit value, not a global
//!
//! ## Example
//!
//! ```
//! use taglog::prelude::*;
//!
//! let capture = MemorySink::new();
//! let view = capture.clone();
//!
//! let logger = Logger::builder()
//!     .threshold(Severity::Info)
//!     .sink(capture)
//!     .build();
//!
//! logger.info("MAIN", "system up");
//! logger.debug("MAIN", "filtered out");
//!
//! assert_eq!(view.lines(), vec!["INFO\t[MAIN]\tsystem up"]);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        sink_handle, write_record, Logger, LoggerBuilder, Plain, Render, Result, Severity, Sink,
        SinkError, SinkHandle, LINE_TERMINATOR,
    };
    pub use crate::sinks::MemorySink;

    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;

    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
}

pub use crate::core::{
    sink_handle, write_record, Logger, LoggerBuilder, Plain, Render, Result, Severity, Sink,
    SinkError, SinkHandle, LINE_TERMINATOR,
};
pub use crate::sinks::MemorySink;

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;

#[cfg(feature = "network")]
pub use crate::sinks::TcpSink;
