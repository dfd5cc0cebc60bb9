//! Station service - registry operations over the repository

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainError, Station, StationId, StationName, StationRepository};

/// Request to register a new station
#[derive(Debug, Clone)]
pub struct CreateStationRequest {
    pub name: String,
}

/// Station service owning the registry lifecycle
///
/// Validation happens here, before the repository is reached, so the store
/// never holds a station that breaks the non-empty name invariant.
#[derive(Debug)]
pub struct StationService<R: StationRepository> {
    repository: Arc<R>,
}

impl<R: StationRepository> StationService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new station and return it with its assigned identity
    pub async fn create(&self, request: CreateStationRequest) -> Result<Station, DomainError> {
        let name = StationName::new(request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let station = self.repository.create(name).await?;
        info!(station_id = %station.id(), name = %station.name(), "Station registered");

        Ok(station)
    }

    /// List all registered stations
    pub async fn list(&self) -> Result<Vec<Station>, DomainError> {
        self.repository.list().await
    }

    /// Remove a station by id
    ///
    /// Removing an id that does not exist (already deleted, or never
    /// assigned) is an idempotent no-op; the boolean reports whether a record
    /// was actually removed.
    pub async fn delete(&self, id: StationId) -> Result<bool, DomainError> {
        let removed = self.repository.delete(id).await?;

        if removed {
            info!(station_id = %id, "Station removed");
        } else {
            debug!(station_id = %id, "Delete of unknown station, treating as no-op");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InMemoryStationRepository;

    fn service() -> StationService<InMemoryStationRepository> {
        StationService::new(Arc::new(InMemoryStationRepository::new()))
    }

    fn create_request(name: &str) -> CreateStationRequest {
        CreateStationRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = service();

        let station = service.create(create_request("강남역")).await.unwrap();
        assert_eq!(station.name().as_str(), "강남역");

        let stations = service.list().await.unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id(), station.id());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let service = service();

        let result = service.create(create_request("  ")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        // Rejected create leaves the registry untouched
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        let station = service.create(create_request("강남역")).await.unwrap();

        assert!(service.delete(station.id()).await.unwrap());
        assert!(!service.delete(station.id()).await.unwrap());
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let service = service();
        service.create(create_request("강남역")).await.unwrap();

        assert!(!service.delete(StationId::new(999)).await.unwrap());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }
}
