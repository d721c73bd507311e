//! Label-setting shortest path search with a line-change penalty.
//!
//! The search settles states in order of cumulative cost, like Dijkstra's
//! algorithm. Edge weights (travel time plus an optional wait when the line
//! changes) are never negative, so a settled state is final and is never
//! re-examined.
//!
//! The frontier is a binary heap keyed by `(cost, station position, state
//! order)`. Among equal costs the station that comes first in the catalog is
//! selected first, which keeps results reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use tracing::{debug, trace};

use super::config::{SearchConfig, SearchStrategy};
use super::graph::Graph;
use super::search::SearchError;
use crate::domain::{LineId, Minutes};

/// Search label of one state.
///
/// With [`SearchStrategy::SingleLabel`] there is one state per station. With
/// [`SearchStrategy::LineAware`] there is one per (station, arriving line).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Catalog position of the station.
    pub station: usize,

    /// Line used to arrive on the best known path, `None` at the start.
    pub line: Option<LineId>,

    /// Best known cumulative cost, `None` while unreached.
    pub cost: Option<Minutes>,

    /// State this one was reached from.
    pub previous: Option<usize>,

    pub settled: bool,
}

impl Label {
    fn unreached(station: usize, line: Option<LineId>) -> Self {
        Self {
            station,
            line,
            cost: None,
            previous: None,
            settled: false,
        }
    }
}

/// All labels left by one search.
#[derive(Debug, Clone)]
pub struct Labels {
    states: Vec<Label>,
    target: Option<usize>,
    settled: usize,
}

impl Labels {
    /// The destination's final state, or `None` if it was never reached.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Returns the label of a state.
    pub fn get(&self, state: usize) -> Option<&Label> {
        self.states.get(state)
    }

    /// Iterate over every label.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.states.iter()
    }

    /// Number of states created during the search.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no state exists.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of states settled before the search stopped.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Lowest known cost of any state at a station.
    pub fn best_cost(&self, station: usize) -> Option<Minutes> {
        self.states
            .iter()
            .filter(|label| label.station == station)
            .filter_map(|label| label.cost)
            .min()
    }
}

#[cfg(test)]
impl Labels {
    /// Labels assembled by hand rather than by a search.
    pub(crate) fn from_states(states: Vec<Label>, target: Option<usize>) -> Self {
        let settled = states.iter().filter(|label| label.settled).count();
        Self {
            states,
            target,
            settled,
        }
    }
}

/// Heap entry: lowest cost first, then catalog position, then state order.
type FrontierEntry = Reverse<(Minutes, usize, usize)>;

/// Optional wall-clock limit for one search.
struct Deadline(Option<Instant>);

impl Deadline {
    fn from_config(config: &SearchConfig) -> Self {
        Deadline(config.timeout().map(|limit| Instant::now() + limit))
    }

    fn check(&self) -> Result<(), SearchError> {
        match self.0 {
            Some(deadline) if Instant::now() >= deadline => Err(SearchError::Timeout),
            _ => Ok(()),
        }
    }
}

/// Reject catalog positions outside `graph`.
pub(super) fn check_positions(graph: &Graph, start: usize, end: usize) -> Result<(), SearchError> {
    let outside = [start, end].into_iter().find(|&p| p >= graph.len());
    match outside {
        Some(position) => Err(SearchError::InvalidStation(format!("position {position}"))),
        None => Ok(()),
    }
}

/// Run the search from `start` until `end` is settled or nothing is left.
///
/// Both arguments are catalog positions in `graph`. The caller handles
/// `start == end` before calling.
///
/// # Errors
///
/// Returns [`SearchError::InvalidStation`] if a position is outside `graph`,
/// or [`SearchError::Timeout`] if the configured timeout expires.
pub fn solve(
    graph: &Graph,
    start: usize,
    end: usize,
    config: &SearchConfig,
) -> Result<Labels, SearchError> {
    check_positions(graph, start, end)?;
    let deadline = Deadline::from_config(config);

    let labels = match config.strategy {
        SearchStrategy::SingleLabel => solve_single_label(graph, start, end, &deadline)?,
        SearchStrategy::LineAware => solve_line_aware(graph, start, end, &deadline)?,
    };

    debug!(
        strategy = %config.strategy,
        from = %graph.station_id(start),
        to = %graph.station_id(end),
        states = labels.len(),
        settled = labels.settled_count(),
        reached = labels.target().is_some(),
        "search complete"
    );

    Ok(labels)
}

fn solve_single_label(
    graph: &Graph,
    start: usize,
    end: usize,
    deadline: &Deadline,
) -> Result<Labels, SearchError> {
    let mut states: Vec<Label> = (0..graph.len())
        .map(|station| Label::unreached(station, None))
        .collect();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut settled = 0;
    let mut target = None;

    states[start].cost = Some(Minutes::ZERO);
    frontier.push(Reverse((Minutes::ZERO, start, start)));

    while let Some(Reverse((cost, _, current))) = frontier.pop() {
        deadline.check()?;

        let label = &states[current];
        if label.settled || label.cost != Some(cost) {
            continue;
        }

        if current == end {
            target = Some(current);
            break;
        }

        states[current].settled = true;
        settled += 1;
        let incoming = states[current].line.clone();

        trace!(station = %graph.station_id(current), %cost, "settled");

        for edge in graph.edges_from(current) {
            let neighbor = &mut states[edge.to];
            if neighbor.settled {
                continue;
            }

            // Charged with the neighbour's wait, judged on the current best line only.
            let penalty = match &incoming {
                Some(line) if *line != edge.line => graph.wait_time(edge.to),
                _ => Minutes::ZERO,
            };
            let candidate = cost + edge.time + penalty;

            if neighbor.cost.is_none_or(|known| candidate < known) {
                neighbor.cost = Some(candidate);
                neighbor.previous = Some(current);
                neighbor.line = Some(edge.line.clone());
                frontier.push(Reverse((candidate, edge.to, edge.to)));
            }
        }
    }

    Ok(Labels {
        states,
        target,
        settled,
    })
}

fn solve_line_aware(
    graph: &Graph,
    start: usize,
    end: usize,
    deadline: &Deadline,
) -> Result<Labels, SearchError> {
    let mut states: Vec<Label> = Vec::new();
    let mut lookup: HashMap<(usize, Option<LineId>), usize> = HashMap::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut settled = 0;
    let mut target = None;

    let origin = intern(&mut states, &mut lookup, start, None);
    states[origin].cost = Some(Minutes::ZERO);
    frontier.push(Reverse((Minutes::ZERO, start, origin)));

    while let Some(Reverse((cost, station, current))) = frontier.pop() {
        deadline.check()?;

        let label = &states[current];
        if label.settled || label.cost != Some(cost) {
            continue;
        }

        if station == end {
            target = Some(current);
            break;
        }

        states[current].settled = true;
        settled += 1;
        let incoming = states[current].line.clone();
        let change_wait = graph.wait_time(station);

        trace!(
            station = %graph.station_id(station),
            line = ?incoming,
            %cost,
            "settled"
        );

        for edge in graph.edges_from(station) {
            let penalty = match &incoming {
                Some(line) if *line != edge.line => change_wait,
                _ => Minutes::ZERO,
            };
            let candidate = cost + edge.time + penalty;

            let next = intern(&mut states, &mut lookup, edge.to, Some(edge.line.clone()));
            let neighbor = &mut states[next];
            if neighbor.settled {
                continue;
            }

            if neighbor.cost.is_none_or(|known| candidate < known) {
                neighbor.cost = Some(candidate);
                neighbor.previous = Some(current);
                frontier.push(Reverse((candidate, edge.to, next)));
            }
        }
    }

    Ok(Labels {
        states,
        target,
        settled,
    })
}

/// Returns the state for (station, line), creating it if needed.
fn intern(
    states: &mut Vec<Label>,
    lookup: &mut HashMap<(usize, Option<LineId>), usize>,
    station: usize,
    line: Option<LineId>,
) -> usize {
    *lookup.entry((station, line.clone())).or_insert_with(|| {
        states.push(Label::unreached(station, line));
        states.len() - 1
    })
}
