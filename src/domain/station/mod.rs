//! Station domain - registry entities and persistence seam

mod entity;
mod repository;
mod validation;

pub use entity::{Station, StationId, StationName};
pub use repository::{in_memory::InMemoryStationRepository, StationRepository};
pub use validation::{validate_station_name, StationValidationError, MAX_STATION_NAME_LENGTH};
