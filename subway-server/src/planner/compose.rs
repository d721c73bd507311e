//! Rebuilds the itinerary from the labels left by the solver.

use tracing::warn;

use super::search::{Network, SearchError};
use super::solver::{Labels, check_positions};
use crate::domain::{PathResult, PathSegment};

/// Walk the predecessor chain from the destination back to the start.
///
/// Labels store cumulative cost only, so each hop's travel time is recovered
/// by finding its connection in the catalog again. If parallel connections
/// share the same endpoints and line, the quickest one is used, which is the
/// one the solver relaxed through.
///
/// # Errors
///
/// Returns [`SearchError::Unreachable`] if the destination was never reached
/// or the chain breaks before arriving back at the start, and
/// [`SearchError::InvalidStation`] if `start` or `end` is not a catalog
/// position.
pub fn compose(
    network: &Network<'_>,
    labels: &Labels,
    start: usize,
    end: usize,
) -> Result<PathResult, SearchError> {
    check_positions(network.graph, start, end)?;
    let unreachable = || SearchError::Unreachable {
        from: network.graph.station_id(start).clone(),
        to: network.graph.station_id(end).clone(),
    };

    let mut state = labels.target().ok_or_else(unreachable)?;
    if labels.get(state).map(|label| label.station) != Some(end) {
        return Err(unreachable());
    }

    let mut segments: Vec<PathSegment> = Vec::new();

    loop {
        let label = labels.get(state).ok_or_else(unreachable)?;
        if label.station == start {
            break;
        }

        // Each hop consumes one state, so a longer chain must loop.
        if segments.len() >= labels.len() {
            warn!(station = %network.graph.station_id(label.station), "predecessor chain loops");
            return Err(unreachable());
        }

        let (Some(previous), Some(line)) = (label.previous, label.line.as_ref()) else {
            warn!(
                station = %network.graph.station_id(label.station),
                "predecessor chain broken"
            );
            return Err(unreachable());
        };
        let previous_label = labels.get(previous).ok_or_else(unreachable)?;

        let from = network
            .stations
            .get(previous_label.station)
            .ok_or_else(unreachable)?;
        let to = network
            .stations
            .get(label.station)
            .ok_or_else(unreachable)?;

        let time = network
            .connections
            .iter()
            .filter(|c| c.matches(&from.id, &to.id, line))
            .map(|c| c.time)
            .min()
            .ok_or_else(|| {
                warn!(from = %from.id, to = %to.id, %line, "no connection for hop");
                unreachable()
            })?;

        segments.push(PathSegment {
            from: from.clone(),
            to: to.clone(),
            line: line.clone(),
            time,
        });
        state = previous;
    }

    segments.reverse();
    Ok(PathResult::from_segments(segments)?)
}
