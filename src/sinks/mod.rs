//! Sink implementations

pub mod memory;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "network")]
pub mod network;

pub use memory::MemorySink;

#[cfg(feature = "console")]
pub use console::ConsoleSink;

#[cfg(feature = "file")]
pub use file::FileSink;

#[cfg(feature = "network")]
pub use network::TcpSink;

// Re-export the trait alongside its implementations
pub use crate::core::Sink;
