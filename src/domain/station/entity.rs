//! Station entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_station_name, StationValidationError};

/// Registry-assigned station identity
///
/// Identities are allocated by the repository, increase monotonically and are
/// never reused after a station is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for StationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<StationId> for u64 {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Station name - non-empty, caller-supplied text
///
/// Uniqueness across stations is not enforced; duplicate names are
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// Create a new StationName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, StationValidationError> {
        let name = name.into();
        validate_station_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = StationValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.0
    }
}

impl std::fmt::Display for StationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Station entity representing a registered subway stop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Registry-assigned identity, never mutated after creation
    id: StationId,

    /// Display name of the station
    name: StationName,

    /// When the station was registered
    created_at: DateTime<Utc>,
}

impl Station {
    /// Create a new station with the given identity and name
    pub fn new(id: StationId, name: StationName) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_name_valid() {
        let name = StationName::new("강남역").unwrap();
        assert_eq!(name.as_str(), "강남역");
    }

    #[test]
    fn test_station_name_empty_rejected() {
        assert!(StationName::new("").is_err());
        assert!(StationName::new("  ").is_err());
    }

    #[test]
    fn test_station_id_display() {
        let id = StationId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_station_construction() {
        let station = Station::new(StationId::new(1), StationName::new("강남역").unwrap());
        assert_eq!(station.id().value(), 1);
        assert_eq!(station.name().as_str(), "강남역");
    }

    #[test]
    fn test_station_serialization() {
        let station = Station::new(StationId::new(7), StationName::new("역삼역").unwrap());
        let json = serde_json::to_value(&station).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "역삼역");
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn test_station_name_deserialization_rejects_empty() {
        let result: Result<StationName, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
