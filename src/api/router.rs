use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::stations;

/// Create the registry router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Station registry; listing is open, mutations are admin-gated in
        // the handlers via RequireAdmin
        .route("/stations", get(stations::list_stations))
        .route("/stations", post(stations::create_station))
        .route("/stations/{station_id}", delete(stations::delete_station))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
