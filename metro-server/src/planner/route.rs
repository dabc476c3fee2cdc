//! Shortest route between two stations, with diagnostics.

use std::collections::BTreeMap;
use std::fmt;

use pathfinding::prelude::bfs;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::network::NetworkGraph;

/// Why a route came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteFailure {
    /// No path between the endpoints, or an endpoint is not in the graph.
    ImpossibleRoute,

    /// The requested network is unknown or has no stations.
    UnknownNetwork(String),
}

impl fmt::Display for RouteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteFailure::ImpossibleRoute => write!(f, "impossible route"),
            RouteFailure::UnknownNetwork(network) => {
                write!(f, "{network} do not exist or has no stations")
            }
        }
    }
}

impl Serialize for RouteFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a route query.
///
/// A missing route is an ordinary outcome: `route` is empty and `reason`
/// says why.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOutcome {
    /// Stations from start to destination inclusive; empty if none.
    pub route: Vec<String>,

    /// Presence of each requested endpoint, set only when one is missing.
    pub present_in_graph: Option<BTreeMap<String, bool>>,

    /// Set exactly when `route` is empty.
    pub reason: Option<RouteFailure>,
}

impl RouteOutcome {
    /// Outcome for a network that is unknown or has no stations.
    pub fn unknown_network(network: impl Into<String>) -> Self {
        Self {
            route: Vec::new(),
            present_in_graph: None,
            reason: Some(RouteFailure::UnknownNetwork(network.into())),
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        !self.route.is_empty()
    }

    /// Number of hops along the route, if one was found.
    pub fn hops(&self) -> Option<usize> {
        self.route.len().checked_sub(1)
    }
}

/// Find a shortest route from `start` to `destiny` in `graph`.
///
/// Presence of each endpoint is checked independently of the other and of
/// the search. When `start == destiny` and the station is in the graph, the
/// route is the single station. Among several shortest routes, which one is
/// returned is unspecified.
pub fn find_route<'a>(graph: &'a NetworkGraph, start: &'a str, destiny: &str) -> RouteOutcome {
    let start_present = graph.contains(start);
    let destiny_present = graph.contains(destiny);

    let present_in_graph = if start_present && destiny_present {
        None
    } else {
        let map: BTreeMap<String, bool> = [(start, start_present), (destiny, destiny_present)]
            .into_iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, present)| (name.to_string(), present))
            .collect();
        (!map.is_empty()).then_some(map)
    };

    let route: Vec<String> = if start_present && destiny_present {
        bfs(&start, |node| graph.neighbors(node), |node| *node == destiny)
            .map(|path| path.into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    debug!(
        start,
        destiny,
        start_present,
        destiny_present,
        hops = route.len().checked_sub(1),
        "route search finished"
    );

    let reason = route.is_empty().then_some(RouteFailure::ImpossibleRoute);

    RouteOutcome {
        route,
        present_in_graph,
        reason,
    }
}
