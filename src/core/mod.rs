//! Core logger types and traits

pub mod error;
pub mod format;
pub mod logger;
pub mod render;
pub mod severity;
pub mod sink;

pub use error::{Result, SinkError};
pub use format::write_record;
pub use logger::{Logger, LoggerBuilder};
pub use render::{Plain, Render};
pub use severity::Severity;
pub use sink::{sink_handle, Sink, SinkHandle, LINE_TERMINATOR};
