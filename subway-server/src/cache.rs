//! Caching layer for route queries.
//!
//! A query's outcome depends only on the catalog and the request, and the
//! catalog never changes while the server runs, so answers can be reused.
//! Timeouts and unknown stations are not cached: the first depends on load,
//! the second would let arbitrary ids fill the cache.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{PathResult, StationId};
use crate::planner::{Planner, SearchConfig, SearchError, SearchRequest, SearchStrategy};

/// Cache key for routes: (start, end, strategy).
type RouteKey = (StationId, StationId, SearchStrategy);

/// Cached query outcome.
pub type RouteEntry = Arc<Result<PathResult, SearchError>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Cache for route query outcomes.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached outcome.
    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    /// Insert an outcome into the cache.
    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Route planner with caching.
///
/// Owns the shared catalog and remembers the outcome of every cacheable query.
pub struct CachedPlanner {
    catalog: Arc<Catalog>,
    cache: RouteCache,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(catalog: Arc<Catalog>, cache_config: &CacheConfig) -> Self {
        Self {
            catalog,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Returns the catalog queries run against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the underlying cache.
    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// Find a route, using the cache if available.
    pub async fn search(&self, request: &SearchRequest, config: &SearchConfig) -> RouteEntry {
        let key = (request.start.clone(), request.end.clone(), config.strategy);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(from = %request.start, to = %request.end, "route cache hit");
            return cached;
        }

        let outcome = Planner::new(self.catalog.network(), config).search(request);
        let cacheable = matches!(outcome, Ok(_) | Err(SearchError::Unreachable { .. }));
        let entry = Arc::new(outcome);

        if cacheable {
            self.cache.insert(key, entry.clone()).await;
        }

        entry
    }
}
