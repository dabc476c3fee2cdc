//! Station record sources.
//!
//! Loads the raw station records of a network by name. Records come back
//! exactly as stored; normalization happens in the cache layer.

mod error;
mod memory;
mod source;

pub use error::StationError;
pub use memory::MemorySource;
pub use source::{JsonDirSource, StationSource};
