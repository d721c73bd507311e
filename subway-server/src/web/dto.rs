//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, PathResult, PathSegment, Station};
use crate::planner::{SearchRequest, SearchStrategy};

/// A station in listings and search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,

    /// Lines serving the station
    pub lines: Vec<String>,

    /// Average wait for a train (minutes)
    pub wait_time_mins: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// All stations in catalog order.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Request to search stations by name or id.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query
    pub q: String,

    /// Maximum results (default 10, max 50)
    pub limit: Option<usize>,
}

/// Station search response.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// Line metadata.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub name: String,

    /// Display colour (#RRGGBB)
    pub color: String,
}

/// The line table.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station id
    pub from: String,

    /// Destination station id
    pub to: String,

    /// Overrides the server's default strategy
    pub strategy: Option<String>,
}

/// One ride on one line.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: String,
    pub from_name: String,
    pub to: String,
    pub to_name: String,
    pub line: String,
    pub time_mins: f64,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,

    /// Strategy that produced the route
    pub strategy: String,

    pub segments: Vec<SegmentResult>,
    pub total_time_mins: f64,
    pub total_travel_time_mins: f64,
    pub total_wait_time_mins: f64,
    pub transfers: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            wait_time_mins: station.wait_time.as_f64(),
            latitude: station.coordinates.map(|c| c.latitude),
            longitude: station.coordinates.map(|c| c.longitude),
        }
    }
}

impl LineResult {
    /// Create from a domain Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            color: line.color.clone(),
        }
    }
}

impl SegmentResult {
    /// Create from a domain PathSegment.
    pub fn from_segment(segment: &PathSegment) -> Self {
        Self {
            from: segment.from.id.to_string(),
            from_name: segment.from.name.clone(),
            to: segment.to.id.to_string(),
            to_name: segment.to.name.clone(),
            line: segment.line.to_string(),
            time_mins: segment.time.as_f64(),
        }
    }
}

impl RouteResponse {
    /// Create from the path found for `request`.
    pub fn from_path(path: &PathResult, request: &SearchRequest, strategy: SearchStrategy) -> Self {
        Self {
            from: request.start.to_string(),
            to: request.end.to_string(),
            strategy: strategy.to_string(),
            segments: path
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_time_mins: path.total_time().as_f64(),
            total_travel_time_mins: path.total_travel_time().as_f64(),
            total_wait_time_mins: path.total_wait_time().as_f64(),
            transfers: path.transfer_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, Minutes, StationId};
    use std::sync::Arc;

    fn station(id: &str, name: &str, wait: u32) -> Arc<Station> {
        Arc::new(Station::new(
            StationId::parse(id).unwrap(),
            name,
            vec![LineId::parse("N").unwrap(), LineId::parse("Q").unwrap()],
            Minutes::whole(wait),
        ))
    }

    fn segment(from: &Arc<Station>, to: &Arc<Station>, line: &str, time: u32) -> PathSegment {
        PathSegment {
            from: from.clone(),
            to: to.clone(),
            line: LineId::parse(line).unwrap(),
            time: Minutes::whole(time),
        }
    }

    #[test]
    fn station_result_from_station() {
        let plain = station("herald_sq", "Herald Square", 2);
        let result = StationResult::from_station(&plain);

        assert_eq!(result.id, "herald_sq");
        assert_eq!(result.lines, vec!["N", "Q"]);
        assert_eq!(result.wait_time_mins, 2.0);
        assert!(result.latitude.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("latitude").is_none());

        let placed = (*plain).clone().with_coordinates(40.7496, -73.9877);
        let result = StationResult::from_station(&placed);
        assert_eq!(result.latitude, Some(40.7496));
        assert_eq!(result.longitude, Some(-73.9877));
    }

    #[test]
    fn route_response_from_path() {
        let a = station("a", "Alpha", 2);
        let b = station("b", "Beta", 3);
        let c = station("c", "Gamma", 4);
        let path =
            PathResult::from_segments(vec![segment(&a, &b, "N", 5), segment(&b, &c, "Q", 4)])
                .unwrap();
        let request = SearchRequest::parse("a", "c").unwrap();

        let response = RouteResponse::from_path(&path, &request, SearchStrategy::LineAware);

        assert_eq!(response.strategy, "line_aware");
        assert_eq!(response.segments.len(), 2);
        assert_eq!(response.segments[0].from_name, "Alpha");
        assert_eq!(response.segments[1].line, "Q");
        assert_eq!(response.total_travel_time_mins, 9.0);
        assert_eq!(response.total_wait_time_mins, 3.0);
        assert_eq!(response.total_time_mins, 12.0);
        assert_eq!(response.transfers, 1);
    }

    #[test]
    fn route_response_for_trivial_route() {
        let request = SearchRequest::parse("a", "a").unwrap();
        let response =
            RouteResponse::from_path(&PathResult::empty(), &request, SearchStrategy::SingleLabel);

        assert_eq!(response.from, "a");
        assert_eq!(response.to, "a");
        assert!(response.segments.is_empty());
        assert_eq!(response.total_time_mins, 0.0);
        assert_eq!(response.transfers, 0);
    }
}
