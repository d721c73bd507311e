//! Validated network catalog.
//!
//! A `Catalog` holds the stations, lines and directed connections of one
//! network, checked once at load time. Route queries borrow it read-only, so
//! it can be shared between threads behind an `Arc` without locking.

mod error;
mod file;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Connection, Line, Station, StationId};
use crate::planner::{Graph, Network};

pub use error::CatalogError;
pub use file::NYC_SAMPLE_JSON;

/// Stations, lines and connections of a network, plus their adjacency.
#[derive(Debug, Clone)]
pub struct Catalog {
    lines: Vec<Line>,
    stations: Vec<Arc<Station>>,
    connections: Vec<Connection>,
    graph: Graph,
}

impl Catalog {
    /// Validate the records and build the adjacency.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - two stations or two lines share an id
    /// - the line table is non-empty and a station or connection uses a line
    ///   missing from it
    /// - a connection references a station missing from `stations`
    pub fn new(
        lines: Vec<Line>,
        stations: Vec<Station>,
        connections: Vec<Connection>,
    ) -> Result<Self, CatalogError> {
        let mut line_ids = HashSet::new();
        for line in &lines {
            if !line_ids.insert(&line.id) {
                return Err(CatalogError::DuplicateLine(line.id.clone()));
            }
        }

        let mut station_ids = HashSet::new();
        for station in &stations {
            if !station_ids.insert(&station.id) {
                return Err(CatalogError::DuplicateStation(station.id.clone()));
            }
        }

        if !lines.is_empty() {
            for station in &stations {
                if let Some(line) = station.lines.iter().find(|l| !line_ids.contains(l)) {
                    return Err(CatalogError::UnknownLine {
                        line: line.clone(),
                        context: format!("station {}", station.id),
                    });
                }
            }
            for (position, connection) in connections.iter().enumerate() {
                if !line_ids.contains(&connection.line) {
                    return Err(CatalogError::UnknownLine {
                        line: connection.line.clone(),
                        context: format!("connection {position}"),
                    });
                }
            }
        }

        let stations: Vec<Arc<Station>> = stations.into_iter().map(Arc::new).collect();
        let graph = Graph::build(&stations, &connections)?;

        debug!(
            lines = lines.len(),
            stations = stations.len(),
            connections = connections.len(),
            "catalog loaded"
        );

        Ok(Self {
            lines,
            stations,
            connections,
            graph,
        })
    }

    /// Returns the line table.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the stations in catalog order.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Returns the directed connections.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Returns the adjacency structure.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Arc<Station>> {
        self.graph.index_of(id).map(|idx| &self.stations[idx])
    }

    /// Returns the view route queries run against.
    pub fn network(&self) -> Network<'_> {
        Network::new(&self.stations, &self.connections, &self.graph)
    }

    /// Search stations by name or id.
    ///
    /// Matching is a case-insensitive substring test. Stations whose name or
    /// id starts with the query come first; otherwise catalog order is kept.
    pub fn search_stations(&self, query: &str, limit: usize) -> Vec<&Arc<Station>> {
        let needle = query.trim().to_lowercase();

        let (prefix, other): (Vec<_>, Vec<_>) = self
            .stations
            .iter()
            .filter_map(|station| {
                let name = station.name.to_lowercase();
                let id = station.id.as_str().to_lowercase();
                if name.starts_with(&needle) || id.starts_with(&needle) {
                    Some((true, station))
                } else if name.contains(&needle) || id.contains(&needle) {
                    Some((false, station))
                } else {
                    None
                }
            })
            .partition(|(is_prefix, _)| *is_prefix);

        prefix
            .into_iter()
            .chain(other)
            .map(|(_, station)| station)
            .take(limit)
            .collect()
    }
}

/// Append the reverse of every connection.
///
/// For networks where every line runs both ways. Applied once while building
/// a catalog; the planner itself never infers reverse edges.
pub fn with_reverse_connections(connections: Vec<Connection>) -> Vec<Connection> {
    let reversed: Vec<Connection> = connections.iter().map(Connection::reversed).collect();
    let mut all = connections;
    all.extend(reversed);
    all
}
