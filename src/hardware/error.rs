//! Location source error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the platform location sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LocationError {
    /// User or OS refused location access
    #[error("location permission denied")]
    PermissionDenied,
    /// No fix could be obtained
    #[error("location unavailable")]
    Unavailable,
    /// Sensor did not deliver a fix in time
    #[error("location request timed out")]
    Timeout,
    /// Anything the platform does not classify
    #[error("unknown location error")]
    Unknown,
}

/// Result type for location source operations
pub type LocationResult<T> = Result<T, LocationError>;

impl LocationError {
    /// Map a platform geolocation error code (1, 2 or 3) to an error kind
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            2 => LocationError::Unavailable,
            3 => LocationError::Timeout,
            _ => LocationError::Unknown,
        }
    }

    /// Platform geolocation code, 0 for `Unknown`
    pub fn code(&self) -> u16 {
        match self {
            LocationError::PermissionDenied => 1,
            LocationError::Unavailable => 2,
            LocationError::Timeout => 3,
            LocationError::Unknown => 0,
        }
    }

    /// Message shown to the user in the status line
    pub fn status_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "Location permission denied",
            LocationError::Unavailable => "GPS unavailable",
            LocationError::Timeout => "Timed out while getting location",
            LocationError::Unknown => "Unknown GPS error",
        }
    }

    /// Whether later samples may still arrive without user action
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LocationError::PermissionDenied)
    }
}
