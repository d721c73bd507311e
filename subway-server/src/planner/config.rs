//! Search configuration for the path planner.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How the solver models line changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// One label per station.
    ///
    /// A line change is judged against the single best line recorded for the
    /// current station and charged the neighbour's wait time. Fast, and what
    /// existing clients expect, but can miss a cheaper route that arrives at
    /// an intermediate station on a slower line without needing a change.
    #[default]
    SingleLabel,

    /// One label per (station, arriving line).
    ///
    /// A line change is charged the wait time of the station where it
    /// happens, so the search cost equals the reported total time and the
    /// result is optimal for it.
    LineAware,
}

impl SearchStrategy {
    /// Returns the configuration name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::SingleLabel => "single_label",
            SearchStrategy::LineAware => "line_aware",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy {0:?} (expected single_label or line_aware)")]
pub struct UnknownStrategy(pub String);

impl FromStr for SearchStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single_label" | "single-label" => Ok(SearchStrategy::SingleLabel),
            "line_aware" | "line-aware" => Ok(SearchStrategy::LineAware),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Configuration parameters for path search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Line-change model used by the solver.
    pub strategy: SearchStrategy,

    /// Maximum wall-clock time for one query (milliseconds).
    /// `None` lets the search run to completion.
    pub timeout_ms: Option<u64>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(strategy: SearchStrategy, timeout_ms: Option<u64>) -> Self {
        Self {
            strategy,
            timeout_ms,
        }
    }

    /// Returns a copy of this configuration using another strategy.
    pub fn with_strategy(&self, strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }

    /// Returns the timeout as a Duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::SingleLabel,
            timeout_ms: None,
        }
    }
}
