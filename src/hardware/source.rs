//! Location source interface

use crate::core::PositionSample;
use crate::hardware::LocationResult;

/// Platform location sensor feeding position samples to a session.
///
/// Sampling cadence belongs to the platform. A session drains the source by
/// calling [`poll`](LocationSource::poll) until it returns `Ok(None)`.
pub trait LocationSource {
    /// Begin watching the position
    fn start(&mut self) -> LocationResult<()>;

    /// Stop watching; pending samples may be discarded
    fn stop(&mut self);

    /// Whether the source is currently watching
    fn is_active(&self) -> bool;

    /// Take the next pending event.
    /// Returns Ok(Some(sample)) if a sample is available
    /// Returns Ok(None) if nothing is pending
    /// Returns Err(error) if the sensor reported a failure for this sample
    fn poll(&mut self) -> LocationResult<Option<PositionSample>>;
}
