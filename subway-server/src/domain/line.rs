//! Lines and the directed connections that run on them.

use super::{LineId, Minutes, StationId};

/// Display metadata for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    /// Colour as `#RRGGBB`
    pub color: String,
}

/// A directed, timed link between two stations on one line.
///
/// Travel in the opposite direction needs its own record.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    pub line: LineId,
    pub time: Minutes,
}

impl Connection {
    /// Creates a new connection.
    pub fn new(from: StationId, to: StationId, line: LineId, time: Minutes) -> Self {
        Self {
            from,
            to,
            line,
            time,
        }
    }

    /// Returns the same connection travelled the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            line: self.line.clone(),
            time: self.time,
        }
    }

    /// Returns true if this record links `from` to `to` on `line`.
    pub fn matches(&self, from: &StationId, to: &StationId, line: &LineId) -> bool {
        &self.from == from && &self.to == to && &self.line == line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let conn = Connection::new(
            sid("times_sq"),
            sid("herald_sq"),
            LineId::parse("N").unwrap(),
            Minutes::whole(3),
        );
        let back = conn.reversed();

        assert_eq!(back.from, sid("herald_sq"));
        assert_eq!(back.to, sid("times_sq"));
        assert_eq!(back.line, conn.line);
        assert_eq!(back.time, conn.time);
    }

    #[test]
    fn matches_is_directional() {
        let n = LineId::parse("N").unwrap();
        let conn = Connection::new(sid("a"), sid("b"), n.clone(), Minutes::whole(1));

        assert!(conn.matches(&sid("a"), &sid("b"), &n));
        assert!(!conn.matches(&sid("b"), &sid("a"), &n));
        assert!(!conn.matches(&sid("a"), &sid("b"), &LineId::parse("Q").unwrap()));
    }
}
