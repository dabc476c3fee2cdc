//! Network graph construction.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{debug, warn};

use super::bypass::{BypassMap, Direction};
use crate::domain::StationRecord;

/// Prefix of the synthetic node placed at each end of a line.
pub const TERMINAL_PREFIX: &str = "terminal-";

/// Name of the synthetic terminal node for a station at the end of a line.
pub fn terminal_name(station: &str) -> String {
    format!("{TERMINAL_PREFIX}{station}")
}

/// Undirected, unit-weight graph of station identifiers.
///
/// Built fresh for every request from the station records and the active
/// color filter; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl NetworkGraph {
    /// Build the graph for `records`, keeping only stations matching `color`.
    ///
    /// An empty `color` keeps every station. Excluded stations are bypassed:
    /// their nearest included neighbors on either side are linked directly.
    /// Records without a name are skipped. Building never fails.
    pub fn build(records: &[StationRecord], color: &str) -> Self {
        let named: Vec<&StationRecord> = records
            .iter()
            .filter(|record| {
                if record.name.is_empty() {
                    warn!(
                        prev = ?record.prev,
                        next = ?record.next,
                        "skipping station record without a name"
                    );
                }
                !record.name.is_empty()
            })
            .collect();

        let (available, rejected): (Vec<&StationRecord>, Vec<&StationRecord>) = named
            .into_iter()
            .partition(|record| record.matches_color(color));

        // Transfer stations appear once per line; any matching record keeps the station.
        let kept: HashSet<&str> = available.iter().map(|r| r.name.as_str()).collect();

        let mut bypass = BypassMap::new();
        for record in rejected {
            if !kept.contains(record.name.as_str()) {
                bypass.exclude(record.name.clone(), record.prev.clone(), record.next.clone());
            }
        }

        let mut graph = Self::default();
        for station in available {
            let terminal = terminal_name(&station.name);
            let prev = bypass
                .resolve(&station.name, station.prev.as_deref(), Direction::Prev, None)
                .unwrap_or(terminal.as_str());
            let next = bypass
                .resolve(&station.name, station.next.as_deref(), Direction::Next, None)
                .unwrap_or(terminal.as_str());

            graph.add_edge(&station.name, prev);
            graph.add_edge(&station.name, next);
        }

        debug!(
            color,
            records = records.len(),
            excluded = bypass.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built network graph"
        );

        graph
    }

    /// Add an undirected edge. Self-loops only register the node.
    fn add_edge(&mut self, a: &str, b: &str) {
        if a == b {
            self.adjacency.entry(a.to_string()).or_default();
            return;
        }
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Whether `node` is in the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Nodes adjacent to `node`, empty if it is not in the graph.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// All nodes, in lexical order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of nodes, terminals included.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
