//! Stations and their passthrough metadata.

use super::{LineId, Minutes, StationId};

/// Geographic position of a station.
///
/// Carried through for consumers; nothing in the planner reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A station in the transit network.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Unique identifier
    pub id: StationId,

    /// Display name
    pub name: String,

    /// Lines serving this station, in catalog order without duplicates
    pub lines: Vec<LineId>,

    /// Average wait incurred when changing lines here
    pub wait_time: Minutes,

    /// Optional position
    pub coordinates: Option<Coordinates>,
}

impl Station {
    /// Creates a station, dropping repeated line ids.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        lines: Vec<LineId>,
        wait_time: Minutes,
    ) -> Self {
        let mut unique: Vec<LineId> = Vec::with_capacity(lines.len());
        for line in lines {
            if !unique.contains(&line) {
                unique.push(line);
            }
        }

        Self {
            id,
            name: name.into(),
            lines: unique,
            wait_time,
            coordinates: None,
        }
    }

    /// Attach a geographic position.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates {
            latitude,
            longitude,
        });
        self
    }

    /// Returns true if the given line serves this station.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }
}
