//! Input validation errors raised by the tracker

use thiserror::Error;

/// Errors raised synchronously by tracker operations.
///
/// A failing operation never mutates tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TrackerError {
    /// Malformed coordinate or accuracy value
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = TrackerError::InvalidInput {
            field: "latitude",
            value: 91.0,
        };
        assert_eq!(error.to_string(), "invalid input: latitude = 91");
    }
}
