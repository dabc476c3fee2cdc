//! Station network graph.
//!
//! Turns a flat list of station records into an undirected graph of station
//! identifiers, optionally restricted to one line color. Stations excluded by
//! the color filter are cut out of their line like nodes of a linked list, so
//! the remaining stations stay connected.

mod bypass;
mod graph;

pub use bypass::{Bypass, BypassMap, Direction};
pub use graph::{NetworkGraph, TERMINAL_PREFIX, terminal_name};
