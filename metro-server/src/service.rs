//! The route finder's two operations: Find Route and List Stations.
//!
//! Each call builds its graph from scratch out of the cached records, so
//! requests never share mutable state.

use tracing::{debug, info};

use crate::cache::{CachedStationStore, NetworkRecords};
use crate::domain::{NetworkName, normalize};
use crate::network::NetworkGraph;
use crate::planner::{RouteFailure, RouteOutcome, find_route};
use crate::stations::{StationError, StationSource};

/// A normalized route query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    pub network: String,
    pub from: String,
    pub destiny: String,
    /// Empty means any color.
    pub color: String,
}

impl RouteQuery {
    /// Build a query from free text, normalizing every field.
    pub fn normalized(network: &str, from: &str, destiny: &str, color: &str) -> Self {
        Self {
            network: normalize(network),
            from: normalize(from),
            destiny: normalize(destiny),
            color: normalize(color),
        }
    }
}

/// Answer to a route query: the normalized endpoints plus the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAnswer {
    pub from: String,
    pub destiny: String,
    pub outcome: RouteOutcome,
}

/// Answer to a station listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationList {
    /// The network's normalized records.
    Stations(NetworkRecords),

    /// The network is unknown or has no stations.
    Unknown { error: String },
}

/// Route finding over cached station datasets.
pub struct MetroService<S> {
    store: CachedStationStore<S>,
}

impl<S: StationSource> MetroService<S> {
    /// Create a service over a cached store.
    pub fn new(store: CachedStationStore<S>) -> Self {
        Self { store }
    }

    /// Records of `network`, or `None` if it is unknown, empty, or not a valid name.
    async fn network_records(
        &self,
        network: &str,
    ) -> Result<Option<NetworkRecords>, StationError> {
        let name = match NetworkName::parse(network) {
            Ok(name) => name,
            Err(e) => {
                debug!(network, error = %e, "treating invalid network name as unknown");
                return Ok(None);
            }
        };

        let records = self.store.records(&name).await?;
        Ok(records.filter(|records| !records.is_empty()))
    }

    /// Find a shortest route for `query`.
    ///
    /// Only storage failures are errors; unknown networks, missing stations
    /// and disconnected stations all produce an empty route with a reason.
    pub async fn find_route(&self, query: &RouteQuery) -> Result<RouteAnswer, StationError> {
        let outcome = match self.network_records(&query.network).await? {
            None => RouteOutcome::unknown_network(&query.network),
            Some(records) => {
                let graph = NetworkGraph::build(&records, &query.color);
                find_route(&graph, &query.from, &query.destiny)
            }
        };

        info!(
            network = %query.network,
            from = %query.from,
            destiny = %query.destiny,
            color = %query.color,
            stations = outcome.route.len(),
            "route query"
        );

        Ok(RouteAnswer {
            from: query.from.clone(),
            destiny: query.destiny.clone(),
            outcome,
        })
    }

    /// List the normalized stations of `network`.
    pub async fn list_stations(&self, network: &str) -> Result<StationList, StationError> {
        let list = match self.network_records(network).await? {
            Some(records) => StationList::Stations(records),
            None => StationList::Unknown {
                error: RouteFailure::UnknownNetwork(network.to_string()).to_string(),
            },
        };
        Ok(list)
    }
}
