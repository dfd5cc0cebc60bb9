//! Station validation utilities

use std::fmt;

/// Maximum length for station names, in characters
pub const MAX_STATION_NAME_LENGTH: usize = 100;

/// Station validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum StationValidationError {
    /// Station name is empty or whitespace-only
    EmptyName,
    /// Station name exceeds maximum length
    NameTooLong { length: usize, max: usize },
}

impl fmt::Display for StationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Station name cannot be empty"),
            Self::NameTooLong { length, max } => {
                write!(
                    f,
                    "Station name too long: {} characters (max {})",
                    length, max
                )
            }
        }
    }
}

impl std::error::Error for StationValidationError {}

/// Validate a station name
pub fn validate_station_name(name: &str) -> Result<(), StationValidationError> {
    if name.trim().is_empty() {
        return Err(StationValidationError::EmptyName);
    }

    let length = name.chars().count();

    if length > MAX_STATION_NAME_LENGTH {
        return Err(StationValidationError::NameTooLong {
            length,
            max: MAX_STATION_NAME_LENGTH,
        });
    }

    Ok(())
}
