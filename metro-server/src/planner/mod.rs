//! Route finding over a built network graph.
//!
//! Answers "which stations do I pass through to get from A to B?" using
//! breadth-first search (every hop costs the same), and explains an empty
//! answer instead of failing.

mod route;

pub use route::{RouteFailure, RouteOutcome, find_route};
