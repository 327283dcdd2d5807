//! Session API and presentation interfaces
//!
//! This module wires the tracker to a location source and a presenter. It
//! includes the session controller, the presenter trait and status text
//! formatting.

pub mod session;
pub mod presenter;
pub mod types;
pub mod formatting;

// Re-export commonly used API types
pub use types::{MapView, SessionError, SessionResult, SessionStats, StatusView, VibrationPattern};
pub use session::ProximitySession;
pub use presenter::{Presenter, RecordingPresenter};
pub use formatting::{distance_text, format_accuracy, format_distance};
