//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::domain::normalize;
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(find_route))
        .route("/route", get(find_route))
        .route("/list", get(list_stations))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find a route between two stations.
///
/// An impossible route is a normal 200 response with a `reason`.
async fn find_route(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<RouteResponse>, AppError> {
    let query = params.into_query(&state.config.default_network);
    let answer = state.metro.find_route(&query).await?;
    Ok(Json(RouteResponse::from(answer)))
}

/// List the stations of a network.
async fn list_stations(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, AppError> {
    let network = normalize(
        params
            .network
            .as_deref()
            .unwrap_or(&state.config.default_network),
    );
    let list = state.metro.list_stations(&network).await?;
    Ok(Json(ListResponse::from(list)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
