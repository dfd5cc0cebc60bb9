//! Station repository trait

use async_trait::async_trait;

use super::{Station, StationId, StationName};
use crate::domain::DomainError;

/// Repository trait for Station persistence
///
/// The repository owns identity allocation: callers hand over a validated
/// name and receive the stored station with its assigned id.
#[async_trait]
pub trait StationRepository: Send + Sync + std::fmt::Debug {
    /// Create a new station, allocating the next identity
    async fn create(&self, name: StationName) -> Result<Station, DomainError>;

    /// Get all stations, in ascending id order
    async fn list(&self) -> Result<Vec<Station>, DomainError>;

    /// Delete a station by id, reporting whether anything was removed
    async fn delete(&self, id: StationId) -> Result<bool, DomainError>;
}

/// In-memory implementation of StationRepository
pub mod in_memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RegistryInner {
        stations: BTreeMap<StationId, Station>,
        last_id: u64,
    }

    /// In-memory implementation of StationRepository
    ///
    /// A single mutex guards both the station map and the id counter, so no
    /// two creates can observe the same counter value and a list never sees
    /// a half-applied mutation. The counter only moves forward; deleting a
    /// station does not free its identity for reuse.
    #[derive(Debug, Default)]
    pub struct InMemoryStationRepository {
        inner: Mutex<RegistryInner>,
    }

    impl InMemoryStationRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl StationRepository for InMemoryStationRepository {
        async fn create(&self, name: StationName) -> Result<Station, DomainError> {
            let mut inner = self.inner.lock().unwrap();

            inner.last_id += 1;
            let station = Station::new(StationId::new(inner.last_id), name);
            inner.stations.insert(station.id(), station.clone());

            Ok(station)
        }

        async fn list(&self) -> Result<Vec<Station>, DomainError> {
            Ok(self.inner.lock().unwrap().stations.values().cloned().collect())
        }

        async fn delete(&self, id: StationId) -> Result<bool, DomainError> {
            Ok(self.inner.lock().unwrap().stations.remove(&id).is_some())
        }
    }
}
