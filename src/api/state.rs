//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, Station, StationId, StationRepository};
use crate::infrastructure::auth::AdminTokenVerifier;
use crate::infrastructure::services::{CreateStationRequest, StationService};

/// Application state shared across request handlers
///
/// The registry is owned here and handed to handlers by reference through
/// axum's state; the verifier answers allow/deny and knows nothing about the
/// registry.
#[derive(Clone)]
pub struct AppState {
    pub station_service: Arc<dyn StationServiceTrait>,
    pub admin_verifier: Arc<AdminTokenVerifier>,
}

impl AppState {
    pub fn new(
        station_service: Arc<dyn StationServiceTrait>,
        admin_verifier: Arc<AdminTokenVerifier>,
    ) -> Self {
        Self {
            station_service,
            admin_verifier,
        }
    }
}

/// Trait for station registry operations, using dynamic dispatch so tests can
/// assemble fresh registries per case
#[async_trait::async_trait]
pub trait StationServiceTrait: Send + Sync {
    async fn create(&self, request: CreateStationRequest) -> Result<Station, DomainError>;
    async fn list(&self) -> Result<Vec<Station>, DomainError>;
    async fn delete(&self, id: StationId) -> Result<bool, DomainError>;
}

#[async_trait::async_trait]
impl<R: StationRepository> StationServiceTrait for StationService<R> {
    async fn create(&self, request: CreateStationRequest) -> Result<Station, DomainError> {
        StationService::create(self, request).await
    }

    async fn list(&self) -> Result<Vec<Station>, DomainError> {
        StationService::list(self).await
    }

    async fn delete(&self, id: StationId) -> Result<bool, DomainError> {
        StationService::delete(self, id).await
    }
}
