//! Caching layer for station records.
//!
//! Datasets change rarely, so each network is loaded and normalized once
//! and then shared read-only between requests. Unknown networks are not
//! cached, so a dataset added later is picked up on the next request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::info;

use crate::domain::{NetworkName, StationRecord};
use crate::stations::{StationError, StationSource};

/// Cached, normalized records of one network.
pub type NetworkRecords = Arc<Vec<StationRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of networks kept in memory.
    pub max_capacity: u64,

    /// How long a loaded network stays valid. `None` keeps it until evicted.
    pub ttl: Option<Duration>,
}

impl CacheConfig {
    /// Set the maximum number of cached networks.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Expire cached networks after `ttl`.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 64,
            ttl: None,
        }
    }
}

/// Why a network could not be put in the cache.
#[derive(Debug)]
enum LoadFailure {
    /// The source has no such network; nothing is cached.
    Unknown,
    Source(StationError),
}

/// Station source with a per-network memo of normalized records.
pub struct CachedStationStore<S> {
    source: S,
    networks: MokaCache<NetworkName, NetworkRecords>,
}

impl<S: StationSource> CachedStationStore<S> {
    /// Create a new cached store.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);
        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            source,
            networks: builder.build(),
        }
    }

    /// Normalized records of `network`, loading them on first use.
    ///
    /// Concurrent first requests for the same network share a single load.
    /// Returns `Ok(None)` if the source has no such network.
    pub async fn records(
        &self,
        network: &NetworkName,
    ) -> Result<Option<NetworkRecords>, StationError> {
        let loaded = self
            .networks
            .try_get_with(network.clone(), async {
                let raw = self
                    .source
                    .load(network)
                    .await
                    .map_err(LoadFailure::Source)?
                    .ok_or(LoadFailure::Unknown)?;

                let records: NetworkRecords =
                    Arc::new(raw.iter().map(StationRecord::from_raw).collect());
                info!(%network, stations = records.len(), "cached network");
                Ok::<_, LoadFailure>(records)
            })
            .await;

        match loaded {
            Ok(records) => Ok(Some(records)),
            Err(failure) => match failure.as_ref() {
                LoadFailure::Unknown => Ok(None),
                LoadFailure::Source(e) => Err(e.clone()),
            },
        }
    }

    /// Access the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Drop every cached network.
    pub fn invalidate_all(&self) {
        self.networks.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawStationRecord;
    use crate::stations::MemorySource;
    use std::path::PathBuf;
    use std::sync::Mutex;

    fn network(s: &str) -> NetworkName {
        NetworkName::parse(s).unwrap()
    }

    /// Source that counts how often it is asked to load.
    struct CountingSource {
        inner: MemorySource,
        loads: Mutex<usize>,
    }

    impl CountingSource {
        fn new(inner: MemorySource) -> Self {
            Self {
                inner,
                loads: Mutex::new(0),
            }
        }

        fn load_count(&self) -> usize {
            *self.loads.lock().unwrap()
        }
    }

    impl StationSource for CountingSource {
        async fn load(
            &self,
            network: &NetworkName,
        ) -> Result<Option<Vec<RawStationRecord>>, StationError> {
            *self.loads.lock().unwrap() += 1;
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.inner.load(network).await
        }
    }

    fn stgo_source() -> CountingSource {
        let inner = MemorySource::new()
            .with_json(
                network("stgo"),
                r#"[{"name": " Conchalí ", "next": "Los Héroes", "color": "AZUL"}]"#,
            )
            .unwrap();
        CountingSource::new(inner)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.max_capacity, 64);
        assert_eq!(config.ttl, None);

        let config = config
            .with_max_capacity(8)
            .with_ttl(Duration::from_secs(60));
        assert_eq!(config.max_capacity, 8);
        assert_eq!(config.ttl, Some(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn records_are_normalized() {
        let store = CachedStationStore::new(stgo_source(), &CacheConfig::default());
        let records = store.records(&network("stgo")).await.unwrap().unwrap();

        assert_eq!(records[0].name, "conchali");
        assert_eq!(records[0].next.as_deref(), Some("los heroes"));
        assert_eq!(records[0].color.as_deref(), Some("azul"));
    }

    #[tokio::test]
    async fn network_is_loaded_once() {
        let store = CachedStationStore::new(stgo_source(), &CacheConfig::default());

        let first = store.records(&network("stgo")).await.unwrap().unwrap();
        let second = store.records(&network("stgo")).await.unwrap().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.source().load_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_first_requests_share_one_load() {
        let store = CachedStationStore::new(stgo_source(), &CacheConfig::default());
        let stgo = network("stgo");

        let (first, second) = tokio::join!(store.records(&stgo), store.records(&stgo));

        assert!(Arc::ptr_eq(
            &first.unwrap().unwrap(),
            &second.unwrap().unwrap()
        ));
        assert_eq!(store.source().load_count(), 1);
    }

    #[tokio::test]
    async fn unknown_network_is_not_cached() {
        let store = CachedStationStore::new(stgo_source(), &CacheConfig::default());

        assert!(store.records(&network("lima")).await.unwrap().is_none());
        assert!(store.records(&network("lima")).await.unwrap().is_none());
        assert_eq!(store.source().load_count(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_reload() {
        let store = CachedStationStore::new(stgo_source(), &CacheConfig::default());

        store.records(&network("stgo")).await.unwrap();
        store.invalidate_all();
        store.records(&network("stgo")).await.unwrap();

        assert_eq!(store.source().load_count(), 2);
    }

    /// Source whose every load fails.
    struct FailingSource;

    impl StationSource for FailingSource {
        async fn load(
            &self,
            _network: &NetworkName,
        ) -> Result<Option<Vec<RawStationRecord>>, StationError> {
            Err(StationError::Json {
                path: PathBuf::from("data/stgo.json"),
                message: "expected value".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn load_failure_is_reported_and_not_cached() {
        let store = CachedStationStore::new(FailingSource, &CacheConfig::default());

        let err = store.records(&network("stgo")).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "JSON parse error in data/stgo.json: expected value"
        );
        assert!(store.records(&network("stgo")).await.is_err());
    }
}
