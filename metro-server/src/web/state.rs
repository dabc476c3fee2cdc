//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedStationStore;
use crate::config::ServerConfig;
use crate::service::MetroService;
use crate::stations::JsonDirSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route finder over the cached datasets
    pub metro: Arc<MetroService<JsonDirSource>>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(metro: MetroService<JsonDirSource>, config: ServerConfig) -> Self {
        Self {
            metro: Arc::new(metro),
            config: Arc::new(config),
        }
    }

    /// Build the state straight from configuration.
    pub fn from_config(config: ServerConfig) -> Self {
        let source = JsonDirSource::new(&config.data_dir);
        let store = CachedStationStore::new(source, &config.cache);
        Self::new(MetroService::new(store), config)
    }
}
