//! Core data types for the proximity tracker

use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::validation::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated point.
    ///
    /// Fails with [`TrackerError::InvalidInput`] for NaN, infinite or
    /// out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> TrackerResult<Self> {
        let point = Self { latitude, longitude };
        point.validate()?;
        Ok(point)
    }

    /// Check that both coordinates are finite and within range
    pub fn validate(&self) -> TrackerResult<()> {
        if !self.latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(TrackerError::InvalidInput {
                field: "latitude",
                value: self.latitude,
            });
        }
        if !self.longitude.is_finite() || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(TrackerError::InvalidInput {
                field: "longitude",
                value: self.longitude,
            });
        }
        Ok(())
    }
}

/// A single fix reported by the location source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub point: GeoPoint,
    /// Reported horizontal accuracy (meters)
    pub accuracy_m: f64,
    /// Platform timestamp (milliseconds since epoch)
    pub timestamp_ms: u64,
}

impl PositionSample {
    pub fn new(point: GeoPoint, accuracy_m: f64) -> Self {
        Self {
            point,
            accuracy_m,
            timestamp_ms: 0,
        }
    }

    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn validate(&self) -> TrackerResult<()> {
        self.point.validate()?;
        if !self.accuracy_m.is_finite() || self.accuracy_m < 0.0 {
            return Err(TrackerError::InvalidInput {
                field: "accuracy_m",
                value: self.accuracy_m,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_accepts_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_geo_point_rejects_invalid() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0),
            Err(TrackerError::InvalidInput { field: "latitude", .. })
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -181.0),
            Err(TrackerError::InvalidInput { field: "longitude", .. })
        ));
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_sample_accuracy_validation() {
        let point = GeoPoint::new(-23.55, -46.63).unwrap();
        assert!(PositionSample::new(point, 0.0).validate().is_ok());
        assert!(PositionSample::new(point, -1.0).validate().is_err());
        assert!(PositionSample::new(point, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_sample_builder() {
        let point = GeoPoint::new(1.0, 2.0).unwrap();
        let sample = PositionSample::new(point, 12.5).with_timestamp(1_700_000_000_000);
        assert_eq!(sample.timestamp_ms, 1_700_000_000_000);
        assert_eq!(sample.accuracy_m, 12.5);
    }
}
