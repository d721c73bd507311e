//! Path types.
//!
//! A `PathResult` is the itinerary produced by a route query: the ordered
//! station-to-station segments plus the aggregated time and transfer metrics.

use std::sync::Arc;

use super::{DomainError, LineId, Minutes, Station};

/// One hop of a path: a single connection ridden from one station to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub from: Arc<Station>,
    pub to: Arc<Station>,
    pub line: LineId,
    /// Travel time of the connection
    pub time: Minutes,
}

/// A complete itinerary with aggregated metrics.
///
/// # Invariants
///
/// - Consecutive segments connect (`to` of one is `from` of the next)
/// - `total_time == total_travel_time + total_wait_time`
/// - `transfer_count` is the number of adjacent segment pairs whose lines differ
/// - Each transfer adds the wait time of the station where it happens
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    segments: Vec<PathSegment>,
    total_time: Minutes,
    total_travel_time: Minutes,
    total_wait_time: Minutes,
    transfer_count: usize,
}

impl PathResult {
    /// The result of a query whose start and end are the same station.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            total_time: Minutes::ZERO,
            total_travel_time: Minutes::ZERO,
            total_wait_time: Minutes::ZERO,
            transfer_count: 0,
        }
    }

    /// Builds a result from segments in travel order, computing the metrics.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two consecutive segments don't share a station.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use subway_server::domain::{LineId, Minutes, PathResult, PathSegment, Station, StationId};
    ///
    /// let station = |id: &str, wait: f64| {
    ///     Arc::new(Station::new(StationId::parse(id).unwrap(), id, vec![], Minutes::new(wait).unwrap()))
    /// };
    /// let (a, b, c) = (station("a", 1.0), station("b", 2.5), station("c", 1.0));
    ///
    /// let path = PathResult::from_segments(vec![
    ///     PathSegment { from: a, to: b.clone(), line: LineId::parse("N").unwrap(), time: Minutes::whole(3) },
    ///     PathSegment { from: b, to: c, line: LineId::parse("B").unwrap(), time: Minutes::whole(3) },
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(path.transfer_count(), 1);
    /// assert_eq!(path.total_wait_time().as_f64(), 2.5);
    /// assert_eq!(path.total_time().as_f64(), 8.5);
    /// ```
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self, DomainError> {
        for (index, window) in segments.windows(2).enumerate() {
            if window[0].to.id != window[1].from.id {
                return Err(DomainError::SegmentsNotContiguous {
                    index: index + 1,
                    expected: window[0].to.id.clone(),
                    found: window[1].from.id.clone(),
                });
            }
        }

        let total_travel_time: Minutes = segments.iter().map(|s| s.time).sum();

        let mut total_wait_time = Minutes::ZERO;
        let mut transfer_count = 0;
        for window in segments.windows(2) {
            if window[0].line != window[1].line {
                transfer_count += 1;
                total_wait_time += window[0].to.wait_time;
            }
        }

        Ok(Self {
            segments,
            total_time: total_travel_time + total_wait_time,
            total_travel_time,
            total_wait_time,
            transfer_count,
        })
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if no segment is travelled (start equals end).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Travel time plus wait time.
    pub fn total_time(&self) -> Minutes {
        self.total_time
    }

    /// Sum of the segment travel times.
    pub fn total_travel_time(&self) -> Minutes {
        self.total_travel_time
    }

    /// Sum of the wait times at transfer stations.
    pub fn total_wait_time(&self) -> Minutes {
        self.total_wait_time
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.transfer_count
    }

    /// First station of the path, if any segment is travelled.
    pub fn origin(&self) -> Option<&Arc<Station>> {
        self.segments.first().map(|s| &s.from)
    }

    /// Last station of the path, if any segment is travelled.
    pub fn destination(&self) -> Option<&Arc<Station>> {
        self.segments.last().map(|s| &s.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: &str, wait: f64) -> Arc<Station> {
        Arc::new(Station::new(
            StationId::parse(id).unwrap(),
            id,
            vec![],
            Minutes::new(wait).unwrap(),
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
    fn empty_has_zero_metrics() {
        let path = PathResult::empty();
        assert!(path.is_empty());
        assert_eq!(path.total_time(), Minutes::ZERO);
        assert_eq!(path.total_travel_time(), Minutes::ZERO);
        assert_eq!(path.total_wait_time(), Minutes::ZERO);
        assert_eq!(path.transfer_count(), 0);
        assert!(path.origin().is_none());
        assert!(path.destination().is_none());
    }

    #[test]
    fn same_line_has_no_wait() {
        let (a, b, c) = (station("a", 2.0), station("b", 2.5), station("c", 2.0));
        let path =
            PathResult::from_segments(vec![segment(&a, &b, "N", 3), segment(&b, &c, "N", 6)])
                .unwrap();

        assert_eq!(path.total_travel_time(), Minutes::whole(9));
        assert_eq!(path.total_wait_time(), Minutes::ZERO);
        assert_eq!(path.transfer_count(), 0);
        assert_eq!(path.total_time(), Minutes::whole(9));
        assert_eq!(path.origin().unwrap().id.as_str(), "a");
        assert_eq!(path.destination().unwrap().id.as_str(), "c");
    }

    #[test]
    fn wait_is_charged_at_transfer_station() {
        let (a, b, c, d) = (
            station("a", 10.0),
            station("b", 2.5),
            station("c", 4.0),
            station("d", 10.0),
        );
        let path = PathResult::from_segments(vec![
            segment(&a, &b, "N", 3),
            segment(&b, &c, "B", 3),
            segment(&c, &d, "N", 1),
        ])
        .unwrap();

        assert_eq!(path.transfer_count(), 2);
        assert_eq!(path.total_wait_time(), Minutes::new(6.5).unwrap());
        assert_eq!(path.total_time(), Minutes::new(13.5).unwrap());
    }

    #[test]
    fn rejects_gap_between_segments() {
        let (a, b, c, d) = (
            station("a", 0.0),
            station("b", 0.0),
            station("c", 0.0),
            station("d", 0.0),
        );
        let err = PathResult::from_segments(vec![segment(&a, &b, "N", 1), segment(&c, &d, "N", 1)])
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::SegmentsNotContiguous { index: 1, .. }
        ));
    }
}
