//! NearStop proximity core
//!
//! Tracks the user's position against a chosen destination and raises a
//! single haptic/visual alert when the user comes within the alert radius.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod hardware;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeoPoint, PositionSample, DEFAULT_ALERT_DISTANCE_KM, EARTH_RADIUS_KM};
pub use crate::algorithms::{checked_haversine_km, haversine_km};
pub use crate::processing::{ProximityResult, ProximityTracker, TrackerPhase, TrackerSnapshot};
pub use crate::validation::{TrackerError, TrackerResult};
pub use crate::utils::{ConfigError, ConfigurationManager, ProximityConfig};
pub use crate::hardware::{
    location_channel, ChannelLocationSource, LocationError, LocationResult, LocationSender,
    LocationSource, MockLocationSource,
};
pub use crate::api::{
    MapView, Presenter, ProximitySession, RecordingPresenter, SessionError, SessionResult,
    SessionStats, StatusView, VibrationPattern,
};
