//! Adjacency structure built from the station and connection lists.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Connection, LineId, Minutes, Station, StationId};

/// A connection names a station that isn't in the station list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("connection {connection} references unknown station {station}")]
pub struct MalformedCatalog {
    /// Position of the offending connection in the connection list.
    pub connection: usize,
    /// The missing station.
    pub station: StationId,
}

/// An outgoing edge of a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Index of the neighbouring station.
    pub to: usize,
    pub line: LineId,
    pub time: Minutes,
}

/// Outgoing edges for every station, indexed by catalog position.
///
/// Every station has an entry, isolated ones included. Edges keep the order
/// in which their connections appear in the catalog.
#[derive(Debug, Clone)]
pub struct Graph {
    ids: Vec<StationId>,
    index: HashMap<StationId, usize>,
    wait_times: Vec<Minutes>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build the adjacency structure in O(V + E).
    ///
    /// # Errors
    ///
    /// Returns `Err` if a connection's endpoint is missing from `stations`.
    pub fn build(
        stations: &[Arc<Station>],
        connections: &[Connection],
    ) -> Result<Self, MalformedCatalog> {
        let ids: Vec<StationId> = stations.iter().map(|s| s.id.clone()).collect();
        let index: HashMap<StationId, usize> = ids
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();
        let wait_times = stations.iter().map(|s| s.wait_time).collect();
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); stations.len()];

        for (position, connection) in connections.iter().enumerate() {
            let lookup = |id: &StationId| {
                index.get(id).copied().ok_or_else(|| MalformedCatalog {
                    connection: position,
                    station: id.clone(),
                })
            };
            let from = lookup(&connection.from)?;
            let to = lookup(&connection.to)?;

            adjacency[from].push(Edge {
                to,
                line: connection.line.clone(),
                time: connection.time,
            });
        }

        Ok(Self {
            ids,
            index,
            wait_times,
            adjacency,
        })
    }

    /// Returns the catalog position of a station.
    pub fn index_of(&self, id: &StationId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the id of the station at a catalog position.
    pub fn station_id(&self, idx: usize) -> &StationId {
        &self.ids[idx]
    }

    /// Returns the wait time of the station at a catalog position.
    pub fn wait_time(&self, idx: usize) -> Minutes {
        self.wait_times[idx]
    }

    /// Returns the outgoing edges of the station at a catalog position.
    pub fn edges_from(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }

    /// Returns the outgoing edges of a station by id.
    pub fn edges(&self, id: &StationId) -> Option<&[Edge]> {
        self.index_of(id).map(|idx| self.edges_from(idx))
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn station(id: &str) -> Arc<Station> {
        Arc::new(Station::new(sid(id), id, vec![], Minutes::whole(2)))
    }

    fn conn(from: &str, to: &str, line: &str, time: u32) -> Connection {
        Connection::new(
            sid(from),
            sid(to),
            LineId::parse(line).unwrap(),
            Minutes::whole(time),
        )
    }

    #[test]
    fn every_station_has_an_entry() {
        let stations = vec![station("a"), station("b"), station("lonely")];
        let connections = vec![conn("a", "b", "N", 3)];

        let graph = Graph::build(&stations, &connections).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(&sid("lonely")), Some(&[][..]));
        assert_eq!(graph.edges(&sid("b")).unwrap().len(), 0);
        assert!(graph.edges(&sid("nowhere")).is_none());
    }

    #[test]
    fn edges_are_directed() {
        let stations = vec![station("a"), station("b")];
        let connections = vec![conn("a", "b", "N", 3)];

        let graph = Graph::build(&stations, &connections).unwrap();
        let edges = graph.edges(&sid("a")).unwrap();

        assert_eq!(edges.len(), 1);
        assert_eq!(graph.station_id(edges[0].to), &sid("b"));
        assert_eq!(edges[0].line.as_str(), "N");
        assert_eq!(edges[0].time, Minutes::whole(3));
        assert!(graph.edges(&sid("b")).unwrap().is_empty());
    }

    #[test]
    fn edges_keep_catalog_order() {
        let stations = vec![station("a"), station("b"), station("c")];
        let connections = vec![
            conn("a", "c", "1", 5),
            conn("a", "b", "N", 3),
            conn("a", "b", "Q", 2),
        ];

        let graph = Graph::build(&stations, &connections).unwrap();
        let lines: Vec<&str> = graph
            .edges(&sid("a"))
            .unwrap()
            .iter()
            .map(|e| e.line.as_str())
            .collect();

        assert_eq!(lines, vec!["1", "N", "Q"]);
    }

    #[test]
    fn records_wait_times_and_positions() {
        let stations = vec![
            station("a"),
            Arc::new(Station::new(
                sid("b"),
                "b",
                vec![],
                Minutes::new(2.5).unwrap(),
            )),
        ];

        let graph = Graph::build(&stations, &[]).unwrap();

        assert_eq!(graph.index_of(&sid("b")), Some(1));
        assert_eq!(graph.wait_time(1), Minutes::new(2.5).unwrap());
    }

    #[test]
    fn unknown_destination_is_malformed() {
        let stations = vec![station("a")];
        let connections = vec![conn("a", "a", "N", 1), conn("a", "ghost", "N", 3)];

        let err = Graph::build(&stations, &connections).unwrap_err();

        assert_eq!(err.connection, 1);
        assert_eq!(err.station, sid("ghost"));
        assert_eq!(
            err.to_string(),
            "connection 1 references unknown station ghost"
        );
    }

    #[test]
    fn unknown_origin_is_malformed() {
        let stations = vec![station("a")];
        let connections = vec![conn("ghost", "a", "N", 3)];

        let err = Graph::build(&stations, &connections).unwrap_err();
        assert_eq!(err.station, sid("ghost"));
    }

    #[test]
    fn empty_catalog() {
        let graph = Graph::build(&[], &[]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
