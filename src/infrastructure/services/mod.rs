//! High-level services over domain repositories

mod station_service;

pub use station_service::{CreateStationRequest, StationService};
