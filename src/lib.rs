//! Subway Station Registry API
//!
//! A registry of named subway stations exposed over HTTP:
//! - open listing of registered stations
//! - admin-gated creation and deletion, authorized per request before the
//!   registry is touched
//! - monotonically increasing station identities, never reused

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::InMemoryStationRepository;
use infrastructure::auth::AdminTokenVerifier;
use infrastructure::services::StationService;

/// Create the application state with a fresh in-memory registry
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = Arc::new(InMemoryStationRepository::new());
    let station_service = Arc::new(StationService::new(repository));
    let admin_verifier = Arc::new(AdminTokenVerifier::new(&config.auth.admin_token)?);

    Ok(AppState::new(station_service, admin_verifier))
}
