//! Metro route finder server.
//!
//! A web application that answers: "which stations does this network have?"
//! and "which stations do I pass through to get from A to B, optionally
//! staying on one line color?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod service;
pub mod stations;
pub mod web;
