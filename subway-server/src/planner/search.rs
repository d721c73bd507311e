//! Route query entry point.
//!
//! Validates the request, short-cuts trivial routes, then runs the solver
//! and composes the result.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Connection, DomainError, PathResult, Station, StationId};

use super::compose::compose;
use super::config::SearchConfig;
use super::graph::{Graph, MalformedCatalog};
use super::solver::solve;

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Start or end isn't in the catalog
    #[error("unknown station {0:?}")]
    InvalidStation(String),

    /// A connection references a station missing from the catalog
    #[error("malformed catalog: {0}")]
    MalformedCatalog(#[from] MalformedCatalog),

    /// No path leads from start to end
    #[error("no route from {from} to {to}")]
    Unreachable { from: StationId, to: StationId },

    /// The reconstructed path broke a path invariant
    #[error("inconsistent path: {0}")]
    InconsistentPath(#[from] DomainError),

    /// Search timed out
    #[error("search timed out")]
    Timeout,
}

/// Request for a route between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    pub start: StationId,
    pub end: StationId,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: StationId, end: StationId) -> Self {
        Self { start, end }
    }

    /// Parse a request from raw ids.
    ///
    /// Text that can't be a station id can't name a catalog station either, so
    /// it is reported as [`SearchError::InvalidStation`].
    pub fn parse(start: &str, end: &str) -> Result<Self, SearchError> {
        Ok(Self::new(parse_station(start)?, parse_station(end)?))
    }

    /// Returns true if start and end are the same station.
    pub fn is_trivial(&self) -> bool {
        self.start == self.end
    }
}

fn parse_station(s: &str) -> Result<StationId, SearchError> {
    StationId::parse(s).map_err(|_| SearchError::InvalidStation(s.to_string()))
}

/// Read-only view of the data a query runs against.
///
/// `graph` must have been built from `stations` and `connections`.
#[derive(Debug, Clone, Copy)]
pub struct Network<'a> {
    pub stations: &'a [Arc<Station>],
    pub connections: &'a [Connection],
    pub graph: &'a Graph,
}

impl<'a> Network<'a> {
    /// Create a new network view.
    pub fn new(
        stations: &'a [Arc<Station>],
        connections: &'a [Connection],
        graph: &'a Graph,
    ) -> Self {
        Self {
            stations,
            connections,
            graph,
        }
    }
}

/// Route planner over one network.
///
/// Holds no per-query state; any number of planners may share a network.
pub struct Planner<'a> {
    network: Network<'a>,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: Network<'a>, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find the quickest route for a request.
    ///
    /// Both stations are validated before anything else. A request whose start
    /// and end are equal yields an empty path without searching.
    pub fn search(&self, request: &SearchRequest) -> Result<PathResult, SearchError> {
        let start = self.resolve(&request.start)?;
        let end = self.resolve(&request.end)?;

        if request.is_trivial() {
            debug!(station = %request.start, "trivial route");
            return Ok(PathResult::empty());
        }

        let labels = solve(self.network.graph, start, end, self.config)?;
        let path = compose(&self.network, &labels, start, end)?;

        debug!(
            from = %request.start,
            to = %request.end,
            segments = path.segments().len(),
            total = %path.total_time(),
            transfers = path.transfer_count(),
            "route found"
        );

        Ok(path)
    }

    fn resolve(&self, id: &StationId) -> Result<usize, SearchError> {
        self.network
            .graph
            .index_of(id)
            .ok_or_else(|| SearchError::InvalidStation(id.to_string()))
    }
}

/// Build the adjacency for `stations` and `connections` and run one query
/// with the default configuration.
///
/// Catalogs used for more than one query should be loaded once through
/// [`crate::catalog::Catalog`] instead.
pub fn find_shortest_path(
    stations: &[Arc<Station>],
    connections: &[Connection],
    start: &str,
    end: &str,
) -> Result<PathResult, SearchError> {
    let graph = Graph::build(stations, connections)?;
    let config = SearchConfig::default();
    let request = SearchRequest::parse(start, end)?;

    Planner::new(Network::new(stations, connections, &graph), &config).search(&request)
}
