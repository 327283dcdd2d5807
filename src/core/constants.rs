//! Physical constants and system defaults

/// Mean Earth radius used for great-circle distances (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default alert radius (km)
pub const DEFAULT_ALERT_DISTANCE_KM: f64 = 1.0;

/// Default vibration pattern: alternating on/off durations (ms)
pub const DEFAULT_VIBRATION_PATTERN_MS: [u32; 5] = [700, 300, 700, 300, 700];

/// Default map zoom level for the first fix
pub const DEFAULT_MAP_ZOOM: u8 = 16;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
