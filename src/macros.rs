//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use taglog::prelude::*;
//! use taglog::{info, warn};
//!
//! let logger = Logger::builder()
//!     .threshold(Severity::Info)
//!     .sink(MemorySink::new())
//!     .build();
//!
//! info!(logger, "NET", "link up");
//!
//! let retries = 3;
//! warn!(logger, "NET", "retry {} failed", retries);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let logger = Logger::new();
/// use taglog::log;
/// log!(logger, Severity::Info, "MAIN", "Simple message");
/// log!(logger, Severity::Error, "MAIN", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log($severity, $tag, format!($($arg)+))
    };
}

/// Log a fatal-severity message.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let logger = Logger::new();
/// use taglog::fatal;
/// fatal!(logger, "PWR", "brown-out detected");
/// fatal!(logger, "PWR", "voltage: {:.2}V", 2.71);
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $tag, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let logger = Logger::new();
/// use taglog::error;
/// error!(logger, "SD", "mount failed");
/// error!(logger, "SD", "code: {}", 13);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $tag, $($arg)+)
    };
}

/// Log a warning-severity message.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let logger = Logger::new();
/// use taglog::warn;
/// warn!(logger, "BAT", "low charge");
/// warn!(logger, "BAT", "{}% remaining", 9);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $tag, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let logger = Logger::new();
/// use taglog::info;
/// info!(logger, "MAIN", "started");
/// info!(logger, "MAIN", "{} sensors online", 4);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $tag, $($arg)+)
    };
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use taglog::prelude::*;
/// # let logger = Logger::new();
/// use taglog::debug;
/// debug!(logger, "I2C", "probing bus");
/// debug!(logger, "I2C", "address: {:#04x}", 0x48);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $tag, $($arg)+)
    };
}
