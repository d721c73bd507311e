//! Domain types for the subway pathfinder.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod id;
mod line;
mod minutes;
mod path;
mod station;

pub use error::DomainError;
pub use id::{InvalidId, LineId, StationId};
pub use line::{Connection, Line};
pub use minutes::{InvalidMinutes, Minutes};
pub use path::{PathResult, PathSegment};
pub use station::{Coordinates, Station};
