//! Station sources backed by JSON files.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{NetworkName, RawStationRecord};

use super::error::StationError;

/// Something that can load the raw station records of a network.
///
/// This abstraction allows the route finder to be tested with in-memory data.
pub trait StationSource: Send + Sync {
    /// Load every station record of `network`.
    ///
    /// Returns `Ok(None)` when no dataset exists under that name. Only
    /// storage failures are errors.
    fn load(
        &self,
        network: &NetworkName,
    ) -> impl Future<Output = Result<Option<Vec<RawStationRecord>>, StationError>> + Send;
}

/// Loads networks from a directory holding one `{network}.json` file each.
///
/// Each file is a JSON array of station objects with optional `name`,
/// `prev`, `next`, `color` and `line` keys.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    data_dir: PathBuf,
}

impl JsonDirSource {
    /// Create a source reading from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory datasets are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the dataset for `network`.
    pub fn path_for(&self, network: &NetworkName) -> PathBuf {
        self.data_dir.join(format!("{}.json", network.as_str()))
    }
}

impl StationSource for JsonDirSource {
    async fn load(
        &self,
        network: &NetworkName,
    ) -> Result<Option<Vec<RawStationRecord>>, StationError> {
        let path = self.path_for(network);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%network, path = %path.display(), "no dataset for network");
                return Ok(None);
            }
            Err(source) => {
                return Err(StationError::Io {
                    path,
                    source: Arc::new(source),
                });
            }
        };

        let records: Vec<RawStationRecord> =
            serde_json::from_str(&contents).map_err(|e| StationError::Json {
                path: path.clone(),
                message: e.to_string(),
            })?;

        debug!(%network, records = records.len(), "loaded station records");
        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn network(s: &str) -> NetworkName {
        NetworkName::parse(s).unwrap()
    }

    #[test]
    fn path_for_network() {
        let source = JsonDirSource::new("/srv/metro");
        assert_eq!(
            source.path_for(&network("stgo")),
            PathBuf::from("/srv/metro/stgo.json")
        );
        assert_eq!(source.data_dir(), Path::new("/srv/metro"));
    }

    #[tokio::test]
    async fn load_existing_network() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("stgo.json"),
            r#"[
                {"name": "Alcántara", "prev": "El Golf", "next": "Escuela Militar", "line": "L1"},
                {"name": "Conchalí", "color": "Azul"}
            ]"#,
        )
        .unwrap();

        let source = JsonDirSource::new(dir.path());
        let records = source.load(&network("stgo")).await.unwrap().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Alcántara"));
        assert_eq!(records[1].color.as_deref(), Some("Azul"));
        assert_eq!(records[1].prev, None);
    }

    #[tokio::test]
    async fn missing_network_is_none() {
        let dir = tempdir().unwrap();
        let source = JsonDirSource::new(dir.path());

        assert!(source.load(&network("gotham")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let source = JsonDirSource::new(dir.path());
        let err = source.load(&network("broken")).await.unwrap_err();

        assert!(matches!(err, StationError::Json { .. }));
    }

    #[tokio::test]
    async fn empty_array_is_some_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("empty.json"), "[]").unwrap();

        let source = JsonDirSource::new(dir.path());
        let records = source.load(&network("empty")).await.unwrap();

        assert_eq!(records.map(|r| r.len()), Some(0));
    }
}
