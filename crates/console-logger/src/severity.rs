//! Severity model and the compile-time threshold

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a log message
///
/// Numerically smaller values are more severe. A severity produces output when
/// it is at least as severe as [`THRESHOLD`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable failure
    Error = 0,
    /// Failure that was caught and handled
    Exception = 1,
    /// Suspicious condition
    Warning = 2,
    /// Informational message
    Info = 3,
}

/// Most verbose severity that produces output, or `None` when logging is off
///
/// Selected by the `max-level-*` cargo features. Features are additive, so the
/// most verbose one enabled wins.
#[cfg(feature = "max-level-info")]
pub const THRESHOLD: Option<Severity> = Some(Severity::Info);

/// Most verbose severity that produces output, or `None` when logging is off
#[cfg(all(feature = "max-level-warning", not(feature = "max-level-info")))]
pub const THRESHOLD: Option<Severity> = Some(Severity::Warning);

/// Most verbose severity that produces output, or `None` when logging is off
#[cfg(all(
    feature = "max-level-exception",
    not(any(feature = "max-level-warning", feature = "max-level-info"))
))]
pub const THRESHOLD: Option<Severity> = Some(Severity::Exception);

/// Most verbose severity that produces output, or `None` when logging is off
#[cfg(all(
    feature = "max-level-error",
    not(any(
        feature = "max-level-exception",
        feature = "max-level-warning",
        feature = "max-level-info"
    ))
))]
pub const THRESHOLD: Option<Severity> = Some(Severity::Error);

/// Most verbose severity that produces output, or `None` when logging is off
#[cfg(not(any(
    feature = "max-level-error",
    feature = "max-level-exception",
    feature = "max-level-warning",
    feature = "max-level-info"
)))]
pub const THRESHOLD: Option<Severity> = None;

impl Severity {
    /// Every severity, most severe first
    pub const ALL: [Self; 4] = [Self::Error, Self::Exception, Self::Warning, Self::Info];

    /// Ordinal of this severity
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this severity passes the compile-time threshold
    #[inline(always)]
    pub const fn is_enabled(self) -> bool {
        match THRESHOLD {
            Some(threshold) => self as u8 <= threshold as u8,
            None => false,
        }
    }

    /// Whether this severity is routed to the error stream
    #[inline(always)]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Error | Self::Exception)
    }

    /// Upper-case name as printed in log output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Exception => "EXCEPTION",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Self::Error),
            "EXCEPTION" => Ok(Self::Exception),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_most_severe_first() {
        assert!(Severity::Error < Severity::Exception);
        assert!(Severity::Exception < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert_eq!(Severity::ALL.map(Severity::index), [0, 1, 2, 3]);
    }

    #[test]
    fn test_enabled_is_monotonic() {
        // Once a severity is disabled, every less severe one is too
        let enabled = Severity::ALL.map(Severity::is_enabled);
        assert!(enabled.windows(2).all(|w| w[0] || !w[1]));
    }

    #[test]
    fn test_enabled_matches_threshold() {
        for severity in Severity::ALL {
            assert_eq!(
                severity.is_enabled(),
                THRESHOLD.is_some_and(|t| severity <= t)
            );
        }
    }

    #[test]
    fn test_urgent_routing() {
        assert!(Severity::Error.is_urgent());
        assert!(Severity::Exception.is_urgent());
        assert!(!Severity::Warning.is_urgent());
        assert!(!Severity::Info.is_urgent());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("Exception".parse::<Severity>().unwrap(), Severity::Exception);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert!(matches!(
            "debug".parse::<Severity>(),
            Err(Error::UnknownSeverity(s)) if s == "debug"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Severity::ALL).unwrap();
        assert_eq!(json, r#"["Error","Exception","Warning","Info"]"#);
        let back: Vec<Severity> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::ALL);
    }
}
