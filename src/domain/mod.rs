//! Domain layer - Core business logic and entities

pub mod error;
pub mod station;

pub use error::DomainError;
pub use station::{
    validate_station_name, InMemoryStationRepository, Station, StationId, StationName,
    StationRepository, StationValidationError,
};
