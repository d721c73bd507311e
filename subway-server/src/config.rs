//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::planner::{SearchConfig, SearchStrategy, UnknownStrategy};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Errors in environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SUBWAY_BIND {value:?} is not a socket address: {source}")]
    Bind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("SUBWAY_STRATEGY: {0}")]
    Strategy(#[from] UnknownStrategy),

    #[error("SUBWAY_SEARCH_TIMEOUT_MS {value:?} is not a whole number of milliseconds")]
    Timeout { value: String },
}

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,

    /// Catalog file to load; the bundled sample when `None`
    pub catalog_path: Option<PathBuf>,

    /// Default search configuration
    pub search: SearchConfig,

    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// Unset and blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_text = get("SUBWAY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_text
            .trim()
            .parse()
            .map_err(|source| ConfigError::Bind {
                value: bind_text.clone(),
                source,
            })?;

        let catalog_path = get("SUBWAY_CATALOG").map(PathBuf::from);

        let strategy = match get("SUBWAY_STRATEGY") {
            Some(s) => s.parse::<SearchStrategy>()?,
            None => SearchStrategy::default(),
        };

        let timeout_ms = get("SUBWAY_SEARCH_TIMEOUT_MS")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Timeout { value })
            })
            .transpose()?;

        Ok(Self {
            bind,
            catalog_path,
            search: SearchConfig::new(strategy, timeout_ms),
            cache: CacheConfig::default(),
        })
    }
}
