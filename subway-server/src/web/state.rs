//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPlanner};
use crate::catalog::Catalog;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Cloned into every handler; everything behind it is read-only or
/// internally synchronised.
#[derive(Clone)]
pub struct AppState {
    /// Route planner with cached outcomes
    pub planner: Arc<CachedPlanner>,

    /// Default search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            planner: Arc::new(CachedPlanner::new(Arc::new(catalog), cache_config)),
            config: Arc::new(config),
        }
    }

    /// Returns the catalog being served.
    pub fn catalog(&self) -> &Catalog {
        self.planner.catalog()
    }
}
