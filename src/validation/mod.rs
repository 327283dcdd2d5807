//! Input validation

pub mod error;

pub use error::{TrackerError, TrackerResult};
