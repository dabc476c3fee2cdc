//! Station loading error types.

use std::path::PathBuf;
use std::sync::Arc;

/// Errors that can occur while loading a network's station records.
///
/// An unknown network is not an error; sources report it as `Ok(None)`.
/// Cloneable so a failed load can be handed to every caller waiting on it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StationError {
    /// The dataset exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The dataset is not a JSON array of station records
    #[error("JSON parse error in {}: {message}", path.display())]
    Json { path: PathBuf, message: String },
}
