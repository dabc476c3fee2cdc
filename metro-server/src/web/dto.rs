//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::StationRecord;
use crate::planner::RouteFailure;
use crate::service::{RouteAnswer, RouteQuery, StationList};

/// Query parameters of a route request.
///
/// Every parameter is optional; a missing one means "not given", which for
/// `network` selects the configured default and for the others is empty.
#[derive(Debug, Default, Deserialize)]
pub struct RouteParams {
    /// Start station
    pub from: Option<String>,

    /// Destination station
    pub destiny: Option<String>,

    /// Restrict the route to one line color
    pub color: Option<String>,

    /// Network name (e.g. "stgo")
    pub network: Option<String>,
}

impl RouteParams {
    /// Normalize into a route query.
    pub fn into_query(self, default_network: &str) -> RouteQuery {
        RouteQuery::normalized(
            self.network.as_deref().unwrap_or(default_network),
            self.from.as_deref().unwrap_or_default(),
            self.destiny.as_deref().unwrap_or_default(),
            self.color.as_deref().unwrap_or_default(),
        )
    }
}

/// Query parameters of a station listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Network name (e.g. "stgo")
    pub network: Option<String>,
}

/// Response for a route request.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Start station, as interpreted
    pub from: String,

    /// Destination station, as interpreted
    pub destiny: String,

    /// Stations from start to destination; always present, possibly empty
    pub route: Vec<String>,

    /// Presence of each endpoint, only when one is missing from the network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_in_graph: Option<BTreeMap<String, bool>>,

    /// Why the route is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RouteFailure>,
}

impl From<RouteAnswer> for RouteResponse {
    fn from(answer: RouteAnswer) -> Self {
        Self {
            from: answer.from,
            destiny: answer.destiny,
            route: answer.outcome.route,
            present_in_graph: answer.outcome.present_in_graph,
            reason: answer.outcome.reason,
        }
    }
}

/// Response for a station listing.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListResponse {
    Stations { stations: Vec<StationRecord> },
    Unknown { error: String },
}

impl From<StationList> for ListResponse {
    fn from(list: StationList) -> Self {
        match list {
            StationList::Stations(records) => ListResponse::Stations {
                stations: records.to_vec(),
            },
            StationList::Unknown { error } => ListResponse::Unknown { error },
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
