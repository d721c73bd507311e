//! JSON catalog format.
//!
//! Records are deserialized loosely and then converted into validated domain
//! types, so every check happens before the first query runs.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Connection, Line, LineId, Minutes, Station, StationId};

use super::error::CatalogError;
use super::{Catalog, with_reverse_connections};

/// The bundled New York City sample network.
pub const NYC_SAMPLE_JSON: &str = include_str!("../../data/nyc_subway.json");

/// Top-level catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Add the reverse of every connection when loading
    #[serde(default)]
    bidirectional: bool,

    #[serde(default)]
    lines: Vec<LineRecord>,

    stations: Vec<StationRecord>,

    #[serde(default)]
    connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Deserialize)]
struct LineRecord {
    id: String,
    name: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct StationRecord {
    id: String,
    name: String,
    #[serde(default)]
    lines: Vec<String>,
    #[serde(alias = "waitTime")]
    wait_time: f64,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    from: String,
    to: String,
    line: String,
    time: f64,
}

fn invalid(context: String, reason: impl ToString) -> CatalogError {
    CatalogError::InvalidField {
        context,
        reason: reason.to_string(),
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl LineRecord {
    fn into_line(self, position: usize) -> Result<Line, CatalogError> {
        let context = || format!("line {position}");
        let id = LineId::parse(&self.id).map_err(|e| invalid(context(), e))?;
        if !is_hex_color(&self.color) {
            return Err(invalid(
                context(),
                format!("color {:?} is not #RRGGBB", self.color),
            ));
        }

        Ok(Line {
            id,
            name: self.name,
            color: self.color,
        })
    }
}

impl StationRecord {
    fn into_station(self, position: usize) -> Result<Station, CatalogError> {
        let context = || format!("station {position}");
        let id = StationId::parse(&self.id).map_err(|e| invalid(context(), e))?;
        let lines = self
            .lines
            .iter()
            .map(|l| LineId::parse(l))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(context(), e))?;
        let wait_time = Minutes::new(self.wait_time).map_err(|e| invalid(context(), e))?;

        let station = Station::new(id, self.name, lines, wait_time);
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(station.with_coordinates(latitude, longitude)),
            (None, None) => Ok(station),
            _ => Err(invalid(
                context(),
                "latitude and longitude must be given together",
            )),
        }
    }
}

impl ConnectionRecord {
    fn into_connection(self, position: usize) -> Result<Connection, CatalogError> {
        let context = || format!("connection {position}");
        let from = StationId::parse(&self.from).map_err(|e| invalid(context(), e))?;
        let to = StationId::parse(&self.to).map_err(|e| invalid(context(), e))?;
        let line = LineId::parse(&self.line).map_err(|e| invalid(context(), e))?;
        let time = Minutes::new(self.time).map_err(|e| invalid(context(), e))?;

        Ok(Connection::new(from, to, line, time))
    }
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(r#"{
    ///     "bidirectional": true,
    ///     "stations": [
    ///         { "id": "a", "name": "Alpha", "wait_time": 2 },
    ///         { "id": "b", "name": "Beta", "wait_time": 2.5 }
    ///     ],
    ///     "connections": [{ "from": "a", "to": "b", "line": "N", "time": 3 }]
    /// }"#).unwrap();
    ///
    /// assert_eq!(catalog.stations().len(), 2);
    /// assert_eq!(catalog.connections().len(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let lines = file
            .lines
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_line(position))
            .collect::<Result<Vec<_>, _>>()?;
        let stations = file
            .stations
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_station(position))
            .collect::<Result<Vec<_>, _>>()?;
        let mut connections = file
            .connections
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_connection(position))
            .collect::<Result<Vec<_>, _>>()?;

        if file.bidirectional {
            connections = with_reverse_connections(connections);
        }

        Catalog::new(lines, stations, connections)
    }

    /// Read, parse and validate a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The bundled New York City sample network.
    pub fn nyc_sample() -> Result<Self, CatalogError> {
        Self::from_json_str(NYC_SAMPLE_JSON)
    }
}
