//! Quickest-route planner.
//!
//! This module implements the core path search: it answers "what is the
//! quickest way from this station to that one, counting the wait whenever
//! the route changes lines?"
//!
//! A query flows through three stages: the adjacency built by [`Graph`], the
//! label-setting search, and the itinerary rebuilt from the search labels.
//! [`Planner`] ties them together and is the only entry point that validates
//! station ids.

mod compose;
mod config;
mod graph;
mod search;
mod solver;


pub use config::{SearchConfig, SearchStrategy, UnknownStrategy};
pub use graph::{Edge, Graph, MalformedCatalog};
pub use search::{Network, Planner, SearchError, SearchRequest, find_shortest_path};
pub use solver::{Label, Labels};
