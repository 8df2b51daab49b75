//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use super::dto::TripResult;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedules/:route_id", get(route_schedules))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Return all trips for a route, each with its ordered stop times.
///
/// An unknown route identifier yields an empty array, never an error.
async fn route_schedules(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Json<Vec<TripResult>> {
    let trips = state
        .routes
        .lookup(&route_id)
        .iter()
        .map(TripResult::from_trip)
        .collect();

    Json(trips)
}
