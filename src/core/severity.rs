//! Severity definitions and the level filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log record severity, ordered from least to most verbose.
///
/// `Off` and `All` are sentinel bounds: `Off` as a threshold emits nothing,
/// `All` emits everything. Neither is valid as the severity of an individual
/// log call, and neither ever appears in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    /// Threshold sentinel: emit nothing. The unconfigured default.
    #[default]
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    /// Threshold sentinel: emit everything.
    All = 6,
}

impl Severity {
    /// The five severities valid at a log call site, least verbose first.
    pub const CALLABLE: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "OFF",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::All => "ALL",
        }
    }

    /// Whether this is one of the `Off`/`All` bounds rather than a severity
    /// a record can carry.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Severity::Off | Severity::All)
    }

    /// The level filter: true iff a record of this severity passes a
    /// `threshold`. Sentinel severities never pass, whatever the threshold.
    ///
    /// ```
    /// use taglog::Severity;
    ///
    /// assert!(Severity::Error.should_emit(Severity::Warn));
    /// assert!(Severity::Warn.should_emit(Severity::Warn));
    /// assert!(!Severity::Info.should_emit(Severity::Warn));
    /// assert!(!Severity::All.should_emit(Severity::All));
    /// ```
    #[inline]
    pub fn should_emit(self, threshold: Severity) -> bool {
        !self.is_sentinel() && self <= threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Fatal => BrightRed,
            Severity::Error => Red,
            Severity::Warn => Yellow,
            Severity::Info => Green,
            Severity::Debug => Blue,
            // Sentinels are never rendered; plain white if it ever happens.
            Severity::Off | Severity::All => White,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Severity::Off),
            "FATAL" => Ok(Severity::Fatal),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            "ALL" => Ok(Severity::All),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Severity::Off < Severity::Fatal);
        assert!(Severity::Fatal < Severity::Error);
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert!(Severity::Debug < Severity::All);
    }

    #[test]
    fn test_filter_at_warn_threshold() {
        let threshold = Severity::Warn;
        assert!(Severity::Fatal.should_emit(threshold));
        assert!(Severity::Error.should_emit(threshold));
        assert!(Severity::Warn.should_emit(threshold));
        assert!(!Severity::Info.should_emit(threshold));
        assert!(!Severity::Debug.should_emit(threshold));
    }

    #[test]
    fn test_sentinels_never_emit() {
        for threshold in [Severity::Off, Severity::Warn, Severity::All] {
            assert!(!Severity::Off.should_emit(threshold));
            assert!(!Severity::All.should_emit(threshold));
        }
    }

    #[test]
    fn test_off_threshold_blocks_everything() {
        for severity in Severity::CALLABLE {
            assert!(!severity.should_emit(Severity::Off));
        }
    }

    #[test]
    fn test_all_threshold_passes_everything() {
        for severity in Severity::CALLABLE {
            assert!(severity.should_emit(Severity::All));
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for severity in Severity::CALLABLE {
            let parsed: Severity = severity.as_str().parse().unwrap();
            assert_eq!(parsed, severity);
        }
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert!("VERBOSE".parse::<Severity>().is_err());
    }
}
