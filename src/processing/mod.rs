//! Position processing

pub mod tracker;

pub use tracker::{ProximityResult, ProximityTracker, TrackerPhase, TrackerSnapshot};
