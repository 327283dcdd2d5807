//! Great-circle distance on a spherical Earth
//!
//! Implements the haversine formula with a mean radius of 6371 km.

use crate::core::{GeoPoint, EARTH_RADIUS_KM};
use crate::validation::TrackerResult;
use std::f64::consts::PI;

/// Great-circle distance between two points in kilometers.
///
/// Inputs are assumed valid. Results for out-of-range or NaN coordinates are
/// undefined; use [`checked_haversine_km`] when the points come from an
/// untrusted source.
#[inline]
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let to_rad = |deg: f64| deg * PI / 180.0;
    let lat1 = to_rad(a.latitude);
    let lat2 = to_rad(b.latitude);
    let d_lat = to_rad(b.latitude - a.latitude);
    let d_lon = to_rad(b.longitude - a.longitude);

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h marginally past 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Validating variant of [`haversine_km`].
///
/// Returns `TrackerError::InvalidInput` if either point is out of range.
pub fn checked_haversine_km(a: &GeoPoint, b: &GeoPoint) -> TrackerResult<f64> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_km(a, b))
}
