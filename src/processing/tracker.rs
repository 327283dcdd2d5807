//! Proximity tracker
//!
//! Consumes position samples and destination changes and decides when the
//! user has arrived. The alert is edge-triggered: it fires once per
//! destination and is re-armed only by picking a new destination.
//!
//! Picking a destination does not re-evaluate the last known position. The
//! distance check for the new destination happens on the next sample.

use crate::algorithms::haversine_km;
use crate::core::{GeoPoint, PositionSample, DEFAULT_ALERT_DISTANCE_KM};
use crate::validation::{TrackerError, TrackerResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Tracker lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerPhase {
    /// No destination picked yet, or cleared by `reset`
    NoDestination,
    /// Destination set, alert armed
    Tracking,
    /// Alert fired for the current destination
    Alerted,
}

/// Outcome of a single position update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityResult {
    /// Distance to the destination, `None` while no destination is set
    pub distance_km: Option<f64>,
    /// True only for the sample that moved the tracker into `Alerted`
    pub alert_triggered: bool,
}

impl ProximityResult {
    /// Result reported while no destination is set
    pub fn no_destination() -> Self {
        Self {
            distance_km: None,
            alert_triggered: false,
        }
    }

    pub fn has_destination(&self) -> bool {
        self.distance_km.is_some()
    }
}

/// Read-only copy of the tracker state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub phase: TrackerPhase,
    pub last_known_position: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    pub alerted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    None,
    Armed(GeoPoint),
    Alerted(GeoPoint),
}

/// Edge-triggered arrival detector for a single destination
#[derive(Debug, Clone)]
pub struct ProximityTracker {
    alert_distance_km: f64,
    last_known_position: Option<GeoPoint>,
    target: Target,
}

impl ProximityTracker {
    /// Create a tracker with the given alert radius.
    ///
    /// The radius must be finite and positive.
    pub fn new(alert_distance_km: f64) -> TrackerResult<Self> {
        if !alert_distance_km.is_finite() || alert_distance_km <= 0.0 {
            return Err(TrackerError::InvalidInput {
                field: "alert_distance_km",
                value: alert_distance_km,
            });
        }

        Ok(Self {
            alert_distance_km,
            last_known_position: None,
            target: Target::None,
        })
    }

    /// Replace the destination and re-arm the alert
    pub fn set_destination(&mut self, point: GeoPoint) -> TrackerResult<()> {
        point.validate()?;

        info!(
            "Destination set to ({:.5}, {:.5})",
            point.latitude, point.longitude
        );
        self.target = Target::Armed(point);
        Ok(())
    }

    /// Record a new position and check it against the destination
    pub fn update_position(&mut self, sample: &PositionSample) -> TrackerResult<ProximityResult> {
        sample.validate()?;
        self.last_known_position = Some(sample.point);

        let (destination, already_alerted) = match self.target {
            Target::None => {
                debug!("Position update without destination");
                return Ok(ProximityResult::no_destination());
            }
            Target::Armed(destination) => (destination, false),
            Target::Alerted(destination) => (destination, true),
        };

        let distance_km = haversine_km(&sample.point, &destination);
        let alert_triggered = !already_alerted && distance_km <= self.alert_distance_km;

        if alert_triggered {
            info!(
                "Destination within {:.3} km (radius {:.3} km), alert triggered",
                distance_km, self.alert_distance_km
            );
            self.target = Target::Alerted(destination);
        } else {
            debug!("Distance to destination: {:.3} km", distance_km);
        }

        Ok(ProximityResult {
            distance_km: Some(distance_km),
            alert_triggered,
        })
    }

    /// Clear the destination; the last known position is kept
    pub fn reset(&mut self) {
        if self.target != Target::None {
            info!("Destination cleared");
        }
        self.target = Target::None;
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> TrackerPhase {
        match self.target {
            Target::None => TrackerPhase::NoDestination,
            Target::Armed(_) => TrackerPhase::Tracking,
            Target::Alerted(_) => TrackerPhase::Alerted,
        }
    }

    /// Active destination, armed or alerted
    pub fn destination(&self) -> Option<GeoPoint> {
        match self.target {
            Target::None => None,
            Target::Armed(point) | Target::Alerted(point) => Some(point),
        }
    }

    /// Most recent accepted position
    pub fn last_known_position(&self) -> Option<GeoPoint> {
        self.last_known_position
    }

    /// Whether the alert fired for the current destination
    pub fn is_alerted(&self) -> bool {
        matches!(self.target, Target::Alerted(_))
    }

    /// Configured alert radius (km)
    pub fn alert_distance_km(&self) -> f64 {
        self.alert_distance_km
    }

    /// Copy of the current state for display or logging
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            phase: self.phase(),
            last_known_position: self.last_known_position,
            destination: self.destination(),
            alerted: self.is_alerted(),
        }
    }
}

impl Default for ProximityTracker {
    fn default() -> Self {
        Self {
            alert_distance_km: DEFAULT_ALERT_DISTANCE_KM,
            last_known_position: None,
            target: Target::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn sample(lat: f64, lon: f64) -> PositionSample {
        PositionSample::new(point(lat, lon), 10.0)
    }

    /// Destination roughly 0.5 km north of the origin used below
    fn half_km_setup() -> (ProximityTracker, PositionSample) {
        let mut tracker = ProximityTracker::default();
        tracker.set_destination(point(-23.5505, -46.6333)).unwrap();
        // 0.0045 deg of latitude is ~0.5 km
        (tracker, sample(-23.5550, -46.6333))
    }

    #[test]
    fn test_initial_state() {
        let tracker = ProximityTracker::default();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.phase, TrackerPhase::NoDestination);
        assert_eq!(snapshot.last_known_position, None);
        assert_eq!(snapshot.destination, None);
        assert!(!snapshot.alerted);
        assert_eq!(tracker.alert_distance_km(), 1.0);
    }

    #[test]
    fn test_rejects_invalid_radius() {
        assert!(ProximityTracker::new(0.0).is_err());
        assert!(ProximityTracker::new(-1.0).is_err());
        assert!(ProximityTracker::new(f64::NAN).is_err());
        assert!(ProximityTracker::new(0.25).is_ok());
    }

    #[test]
    fn test_no_destination_sentinel() {
        let mut tracker = ProximityTracker::default();
        let result = tracker.update_position(&sample(-23.55, -46.63)).unwrap();

        assert_eq!(result.distance_km, None);
        assert_ne!(result.distance_km, Some(0.0));
        assert!(!result.alert_triggered);
        assert!(!result.has_destination());
        assert_eq!(tracker.last_known_position(), Some(point(-23.55, -46.63)));
        assert_eq!(tracker.phase(), TrackerPhase::NoDestination);
    }

    #[test]
    fn test_zero_distance_is_distinct_from_sentinel() {
        let mut tracker = ProximityTracker::default();
        tracker.set_destination(point(-23.55, -46.63)).unwrap();
        let result = tracker.update_position(&sample(-23.55, -46.63)).unwrap();
        assert_eq!(result.distance_km, Some(0.0));
        assert!(result.alert_triggered);
    }

    #[test]
    fn test_edge_trigger_fires_once() {
        let (mut tracker, near) = half_km_setup();

        let first = tracker.update_position(&near).unwrap();
        let distance = first.distance_km.unwrap();
        assert!((distance - 0.5).abs() < 0.01, "distance: {}", distance);
        assert!(first.alert_triggered);
        assert_eq!(tracker.phase(), TrackerPhase::Alerted);

        for _ in 0..5 {
            let result = tracker.update_position(&near).unwrap();
            assert!(!result.alert_triggered);
        }
        assert_eq!(tracker.phase(), TrackerPhase::Alerted);
    }

    #[test]
    fn test_idempotent_while_alerted() {
        let (mut tracker, near) = half_km_setup();
        tracker.update_position(&near).unwrap();

        let first = tracker.update_position(&near).unwrap();
        let second = tracker.update_position(&near).unwrap();
        assert!(!first.alert_triggered);
        assert!(!second.alert_triggered);
        assert_eq!(first.distance_km, second.distance_km);
    }

    #[test]
    fn test_departure_observable_while_alerted() {
        let (mut tracker, near) = half_km_setup();
        tracker.update_position(&near).unwrap();

        let far = tracker.update_position(&sample(-23.60, -46.70)).unwrap();
        assert!(far.distance_km.unwrap() > 1.0);
        assert!(!far.alert_triggered);
        assert_eq!(tracker.phase(), TrackerPhase::Alerted);

        // Coming back does not buzz again for the same destination
        let back = tracker.update_position(&near).unwrap();
        assert!(!back.alert_triggered);
    }

    #[test]
    fn test_new_destination_rearms() {
        let (mut tracker, near) = half_km_setup();
        assert!(tracker.update_position(&near).unwrap().alert_triggered);

        tracker.set_destination(point(-23.5510, -46.6335)).unwrap();
        assert_eq!(tracker.phase(), TrackerPhase::Tracking);
        assert!(!tracker.is_alerted());

        let result = tracker.update_position(&near).unwrap();
        assert!(result.alert_triggered);
    }

    #[test]
    fn test_same_destination_rearms() {
        let (mut tracker, near) = half_km_setup();
        tracker.update_position(&near).unwrap();

        tracker.set_destination(point(-23.5505, -46.6333)).unwrap();
        assert!(tracker.update_position(&near).unwrap().alert_triggered);
    }

    #[test]
    fn test_destination_change_does_not_reevaluate() {
        let mut tracker = ProximityTracker::default();
        tracker.update_position(&sample(-23.5505, -46.6333)).unwrap();

        // Already inside the radius of the new destination, but nothing fires yet
        tracker.set_destination(point(-23.5510, -46.6335)).unwrap();
        assert_eq!(tracker.phase(), TrackerPhase::Tracking);
        assert!(!tracker.is_alerted());

        let result = tracker.update_position(&sample(-23.5505, -46.6333)).unwrap();
        assert!(result.alert_triggered);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let destination = point(0.0, 0.0);
        let position = point(0.0, 0.01);
        let exact = haversine_km(&position, &destination);

        let mut tracker = ProximityTracker::new(exact).unwrap();
        tracker.set_destination(destination).unwrap();
        let result = tracker
            .update_position(&PositionSample::new(position, 5.0))
            .unwrap();
        assert!(result.alert_triggered);
    }

    #[test]
    fn test_custom_radius() {
        let mut tracker = ProximityTracker::new(0.1).unwrap();
        tracker.set_destination(point(-23.5505, -46.6333)).unwrap();

        let result = tracker.update_position(&sample(-23.5550, -46.6333)).unwrap();
        assert!(!result.alert_triggered);
        assert_eq!(tracker.phase(), TrackerPhase::Tracking);

        let result = tracker.update_position(&sample(-23.5510, -46.6335)).unwrap();
        assert!(result.alert_triggered);
    }

    #[test]
    fn test_reset_keeps_position() {
        let (mut tracker, near) = half_km_setup();
        tracker.update_position(&near).unwrap();

        tracker.reset();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.phase, TrackerPhase::NoDestination);
        assert_eq!(snapshot.destination, None);
        assert!(!snapshot.alerted);
        assert_eq!(snapshot.last_known_position, Some(near.point));

        let result = tracker.update_position(&near).unwrap();
        assert_eq!(result, ProximityResult::no_destination());
    }

    #[test]
    fn test_reset_from_tracking() {
        let mut tracker = ProximityTracker::default();
        tracker.set_destination(point(1.0, 1.0)).unwrap();
        tracker.reset();
        assert_eq!(tracker.phase(), TrackerPhase::NoDestination);
    }

    #[test]
    fn test_invalid_sample_leaves_state_untouched() {
        let (mut tracker, near) = half_km_setup();
        tracker.update_position(&near).unwrap();
        let before = tracker.snapshot();

        let bad = PositionSample {
            point: GeoPoint {
                latitude: f64::NAN,
                longitude: 0.0,
            },
            accuracy_m: 5.0,
            timestamp_ms: 0,
        };
        assert!(matches!(
            tracker.update_position(&bad),
            Err(TrackerError::InvalidInput { field: "latitude", .. })
        ));

        let negative_accuracy = PositionSample::new(point(0.0, 0.0), -3.0);
        assert!(tracker.update_position(&negative_accuracy).is_err());

        assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn test_invalid_destination_leaves_state_untouched() {
        let (mut tracker, near) = half_km_setup();
        tracker.update_position(&near).unwrap();
        let before = tracker.snapshot();

        let bad = GeoPoint {
            latitude: 0.0,
            longitude: 200.0,
        };
        assert!(tracker.set_destination(bad).is_err());
        assert_eq!(tracker.snapshot(), before);
        assert_eq!(tracker.phase(), TrackerPhase::Alerted);
    }

    #[test]
    fn test_arrival_scenario() {
        let mut tracker = ProximityTracker::default();
        tracker.set_destination(point(-23.5505, -46.6333)).unwrap();

        let far = tracker.update_position(&sample(-23.5605, -46.6433)).unwrap();
        let far_km = far.distance_km.unwrap();
        assert!((far_km - 1.51).abs() < 0.05, "distance: {}", far_km);
        assert!(!far.alert_triggered);

        let near = tracker.update_position(&sample(-23.5510, -46.6335)).unwrap();
        let near_km = near.distance_km.unwrap();
        assert!((near_km - 0.06).abs() < 0.005, "distance: {}", near_km);
        assert!(near.alert_triggered);
    }
}
