//! Web layer for the subway route planner.
//!
//! Provides JSON endpoints for browsing the catalog and planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
