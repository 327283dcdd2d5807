//! Status text formatting
//!
//! Turns tracker output into the strings shown on the status card.

pub const INITIALIZING_TEXT: &str = "Initializing GPS…";
pub const WAITING_FOR_LOCATION_TEXT: &str = "Waiting for location";
pub const STARTING_GPS_TEXT: &str = "Starting GPS…";
pub const GPS_STOPPED_TEXT: &str = "GPS stopped";
pub const CHOOSE_DESTINATION_TEXT: &str = "Tap the map to choose a destination";
pub const DESTINATION_SET_TEXT: &str = "Destination set";
pub const DESTINATION_CLEARED_TEXT: &str = "Destination cleared";
pub const DESTINATION_NEARBY_TEXT: &str = "Destination nearby!";

/// Format a distance: whole meters below 1 km, kilometers with two decimals above
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{} m", (distance_km * 1000.0).round() as u64)
    } else {
        format!("{:.2} km", distance_km)
    }
}

/// Distance line for an optional distance; `None` prompts for a destination
pub fn distance_text(distance_km: Option<f64>) -> String {
    match distance_km {
        Some(distance_km) => format_distance(distance_km),
        None => CHOOSE_DESTINATION_TEXT.to_string(),
    }
}

/// Accuracy line, rounded to whole meters
pub fn format_accuracy(accuracy_m: f64) -> String {
    format!("Accuracy ±{} m", accuracy_m.round() as u64)
}
