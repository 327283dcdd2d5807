//! Common API types and data structures

use crate::core::GeoPoint;
use crate::hardware::LocationError;
use crate::utils::ConfigError;
use crate::validation::TrackerError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Tracker rejected the input
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    /// Location source failed to start
    #[error("location source error: {0}")]
    Location(#[from] LocationError),
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// `process` called before `start`
    #[error("session not started")]
    NotStarted,
}

/// Alternating vibrate/pause durations in milliseconds, starting with vibrate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibrationPattern(Vec<u32>);

impl VibrationPattern {
    /// Wrap a list of alternating durations
    pub fn new(durations_ms: Vec<u32>) -> Self {
        Self(durations_ms)
    }

    /// Raw durations, vibrate first
    pub fn durations_ms(&self) -> &[u32] {
        &self.0
    }

    /// Sum of all vibrate and pause durations
    pub fn total_duration_ms(&self) -> u64 {
        self.0.iter().map(|&ms| ms as u64).sum()
    }
}

/// Map viewport hint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Everything the presentation layer needs to draw the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusView {
    /// Large distance line ("850 m", "1.43 km" or a prompt)
    pub distance_text: String,
    /// Smaller status line (accuracy, errors, alert notice)
    pub status_text: String,
    /// Pulsing alert card, kept until a new destination is picked
    pub alert_active: bool,
    /// User marker
    pub user_position: Option<GeoPoint>,
    /// Destination marker
    pub destination: Option<GeoPoint>,
    /// Set only when the map should move, e.g. on the first fix
    pub recenter: Option<MapView>,
}

/// Counters kept for the lifetime of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub samples_processed: u32,
    pub samples_rejected: u32,
    pub source_errors: u32,
    pub alerts_fired: u32,
}
