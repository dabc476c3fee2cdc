//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::domain::normalize;

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Configuration for the route finder server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory holding one `{network}.json` dataset per network.
    pub data_dir: PathBuf,

    /// Network used when a request does not name one.
    pub default_network: String,

    /// Station record cache settings.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from `METRO_*` environment variables.
    ///
    /// * `METRO_BIND_ADDR` (default `127.0.0.1:3000`)
    /// * `METRO_DATA_DIR` (default `data`)
    /// * `METRO_DEFAULT_NETWORK` (default `stgo`)
    /// * `METRO_CACHE_CAPACITY` (default 64 networks)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("METRO_BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                key: "METRO_BIND_ADDR",
                value,
            })?;
        }

        if let Some(value) = lookup("METRO_DATA_DIR") {
            config.data_dir = PathBuf::from(value);
        }

        if let Some(value) = lookup("METRO_DEFAULT_NETWORK") {
            config = config.with_default_network(&value);
        }

        if let Some(value) = lookup("METRO_CACHE_CAPACITY") {
            let capacity = value.parse().map_err(|_| ConfigError::Invalid {
                key: "METRO_CACHE_CAPACITY",
                value,
            })?;
            config.cache = config.cache.with_max_capacity(capacity);
        }

        Ok(config)
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the default network (normalized).
    pub fn with_default_network(mut self, network: &str) -> Self {
        self.default_network = normalize(network);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            default_network: "stgo".to_string(),
            cache: CacheConfig::default(),
        }
    }
}
