//! Domain types for the metro route finder.
//!
//! Station records arrive un-normalized from a dataset; everything past
//! [`StationRecord::from_raw`] works on normalized strings only.

mod network_name;
mod normalize;
mod station;

pub use network_name::{InvalidNetworkName, NetworkName};
pub use normalize::{normalize, normalize_opt};
pub use station::{RawStationRecord, StationRecord};
