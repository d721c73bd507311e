//! Station and line identifier types.

use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id {value:?}: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    value: String,
    reason: &'static str,
}

fn validate(kind: &'static str, s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            kind,
            value: s.to_string(),
            reason: "must not be empty",
        });
    }

    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidId {
            kind,
            value: s.to_string(),
            reason: "must not contain whitespace or control characters",
        });
    }

    Ok(())
}

/// Identifier of a station in the catalog (e.g. `times_sq`).
///
/// Any `StationId` is non-empty and free of whitespace.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationId;
///
/// let id = StationId::parse("times_sq").unwrap();
/// assert_eq!(id.as_str(), "times_sq");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("times sq").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate("station", s)?;
        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a service line (e.g. `N`, `7`).
///
/// # Examples
///
/// ```
/// use subway_server::domain::LineId;
///
/// let n = LineId::parse("N").unwrap();
/// assert_eq!(n.to_string(), "N");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate("line", s)?;
        Ok(LineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("times_sq").is_ok());
        assert!(StationId::parse("59_lex").is_ok());
        assert!(LineId::parse("7").is_ok());
        assert!(LineId::parse("N").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
        assert!(LineId::parse("").is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(StationId::parse(" times_sq").is_err());
        assert!(StationId::parse("times sq").is_err());
        assert!(LineId::parse("N\t").is_err());
        assert!(LineId::parse("N\n").is_err());
    }

    #[test]
    fn error_display() {
        let err = StationId::parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station id \"\": must not be empty"
        );

        let err = LineId::parse("a b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid line id \"a b\": must not contain whitespace or control characters"
        );
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("herald_sq").unwrap();
        assert_eq!(format!("{}", id), "herald_sq");
        assert_eq!(format!("{:?}", id), "StationId(herald_sq)");

        let line = LineId::parse("Q").unwrap();
        assert_eq!(format!("{:?}", line), "LineId(Q)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = StationId::parse("atlantic_av").unwrap();
        let b = StationId::parse("bway_lafayette").unwrap();
        assert!(a < b);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[a-z0-9_]{1,20}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Anything containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[a-z]{0,5}", b in "[a-z]{0,5}") {
            let s = format!("{a} {b}");
            prop_assert!(StationId::parse(&s).is_err());
            prop_assert!(LineId::parse(&s).is_err());
        }
    }
}
