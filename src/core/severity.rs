//! Severity definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    /// Every severity, lowest first
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Literal tag written after the instance name, e.g. `"WARN : "`
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG : ",
            Severity::Info => "INFO : ",
            Severity::Warning => "WARN : ",
            Severity::Error => "ERROR : ",
            Severity::Fatal => "FATAL : ",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Map level text to a severity, falling back to [`Severity::Info`].
///
/// Matching is case-insensitive and accepts both `warn` and `warning`.
/// Unknown or empty text is not an error; use `str::parse` for strict parsing.
///
/// ```
/// use jagger::{parse_level, Severity};
///
/// assert_eq!(parse_level("WARNING"), Severity::Warning);
/// assert_eq!(parse_level("bogus"), Severity::Info);
/// ```
pub fn parse_level(text: &str) -> Severity {
    text.parse().unwrap_or(Severity::Info)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::UnrecognizedSeverity(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_tags() {
        assert_eq!(Severity::Debug.tag(), "DEBUG : ");
        assert_eq!(Severity::Info.tag(), "INFO : ");
        assert_eq!(Severity::Warning.tag(), "WARN : ");
        assert_eq!(Severity::Error.tag(), "ERROR : ");
        assert_eq!(Severity::Fatal.tag(), "FATAL : ");
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("WARNING"), Severity::Warning);
        assert_eq!(parse_level("warn"), Severity::Warning);
        assert_eq!(parse_level("Warning"), Severity::Warning);
        assert_eq!(parse_level("DeBuG"), Severity::Debug);
        assert_eq!(parse_level("ERROR"), Severity::Error);
        assert_eq!(parse_level("fatal"), Severity::Fatal);
        assert_eq!(parse_level("info"), Severity::Info);
    }

    #[test]
    fn test_parse_level_unknown_falls_back_to_info() {
        assert_eq!(parse_level("bogus"), Severity::Info);
        assert_eq!(parse_level(""), Severity::Info);
        assert_eq!(parse_level("trace"), Severity::Info);
        assert_eq!(parse_level(" warn"), Severity::Info);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "bogus".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref s) if s == "bogus"));
        assert_eq!("Error".parse::<Severity>().unwrap(), Severity::Error);
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Severity::try_from(0).unwrap(), Severity::Debug);
        assert_eq!(Severity::try_from(4).unwrap(), Severity::Fatal);

        let err = Severity::try_from(5).unwrap_err();
        assert!(matches!(err, LoggerError::UnrecognizedSeverity(5)));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"Warning\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Warning);
    }
}
