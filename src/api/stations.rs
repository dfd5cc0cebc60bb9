//! Station registry endpoints
//!
//! Listing is open; create and delete require the admin token via
//! [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Station, StationId};
use crate::infrastructure::services::CreateStationRequest;

/// Request to register a new station
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStationApiRequest {
    pub name: String,
}

/// Station representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
    pub created_at: String,
}

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().value(),
            name: station.name().to_string(),
            created_at: station.created_at().to_rfc3339(),
        }
    }
}

/// GET /stations
pub async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = state.station_service.list().await.map_err(ApiError::from)?;

    Ok(Json(stations.iter().map(StationResponse::from).collect()))
}

/// POST /stations
pub async fn create_station(
    State(state): State<AppState>,
    RequireAdmin: RequireAdmin,
    Json(request): Json<CreateStationApiRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(name = %request.name, "Admin creating station");

    let station = state
        .station_service
        .create(CreateStationRequest { name: request.name })
        .await
        .map_err(ApiError::from)?;

    let location = format!("/stations/{}", station.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from(&station)),
    ))
}

/// DELETE /stations/{station_id}
pub async fn delete_station(
    State(state): State<AppState>,
    RequireAdmin: RequireAdmin,
    Path(station_id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    debug!(station_id, "Admin deleting station");

    // Deleting an id that no longer exists is reported as success as well;
    // the registry treats it as a no-op.
    state
        .station_service
        .delete(StationId::new(station_id))
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationName;

    #[test]
    fn test_create_station_request_deserialization() {
        let json = r#"{"name": "강남역"}"#;

        let request: CreateStationApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "강남역");
    }

    #[test]
    fn test_create_station_request_rejects_missing_name() {
        let result: Result<CreateStationApiRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_station_response_from_entity() {
        let station = Station::new(StationId::new(3), StationName::new("역삼역").unwrap());

        let response = StationResponse::from(&station);
        assert_eq!(response.id, 3);
        assert_eq!(response.name, "역삼역");
        assert!(!response.created_at.is_empty());
    }

    #[test]
    fn test_station_response_serialization() {
        let station = Station::new(StationId::new(1), StationName::new("강남역").unwrap());
        let json = serde_json::to_value(StationResponse::from(&station)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "강남역");
    }
}
