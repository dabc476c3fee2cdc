//! Web layer for the metro route finder.
//!
//! Provides HTTP endpoints for finding routes and listing stations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
