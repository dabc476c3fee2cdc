//! In-memory station source for tests and embedding.

use std::collections::HashMap;

use crate::domain::{NetworkName, RawStationRecord};

use super::error::StationError;
use super::source::StationSource;

/// Station source serving fixed datasets held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    networks: HashMap<NetworkName, Vec<RawStationRecord>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a network's records.
    pub fn with_network(mut self, network: NetworkName, records: Vec<RawStationRecord>) -> Self {
        self.networks.insert(network, records);
        self
    }

    /// Parse a JSON array of station records and add it as `network`.
    pub fn with_json(
        self,
        network: NetworkName,
        json: &str,
    ) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str(json)?;
        Ok(self.with_network(network, records))
    }
}

impl StationSource for MemorySource {
    async fn load(
        &self,
        network: &NetworkName,
    ) -> Result<Option<Vec<RawStationRecord>>, StationError> {
        Ok(self.networks.get(network).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(s: &str) -> NetworkName {
        NetworkName::parse(s).unwrap()
    }

    #[tokio::test]
    async fn serves_added_networks() {
        let source = MemorySource::new()
            .with_json(network("stgo"), r#"[{"name": "Tobalaba"}]"#)
            .unwrap();

        let records = source.load(&network("stgo")).await.unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert!(source.load(&network("lima")).await.unwrap().is_none());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(MemorySource::new().with_json(network("x"), "[").is_err());
    }
}
