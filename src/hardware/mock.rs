//! Mock location source for testing and development

use crate::core::{GeoPoint, PositionSample};
use crate::hardware::{LocationError, LocationResult, LocationSource};
use std::collections::VecDeque;

/// Scripted location source
pub struct MockLocationSource {
    queue: VecDeque<LocationResult<PositionSample>>,
    active: bool,
    connected: bool,
    loss_reported: bool,
    start_error: Option<LocationError>,
    samples_delivered: u32,
    errors_delivered: u32,
    next_timestamp_ms: u64,
}

impl MockLocationSource {
    /// Create an idle, connected source with an empty queue
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            active: false,
            connected: true,
            loss_reported: false,
            start_error: None,
            samples_delivered: 0,
            errors_delivered: 0,
            next_timestamp_ms: 0,
        }
    }

    /// Queue a sample
    pub fn push_sample(&mut self, sample: PositionSample) {
        self.queue.push_back(Ok(sample));
    }

    /// Queue a fix at the given coordinates, stamped 1 s after the previous one
    pub fn push_fix(&mut self, latitude: f64, longitude: f64, accuracy_m: f64) {
        self.next_timestamp_ms += 1000;
        let sample = PositionSample {
            point: GeoPoint { latitude, longitude },
            accuracy_m,
            timestamp_ms: self.next_timestamp_ms,
        };
        self.queue.push_back(Ok(sample));
    }

    /// Queue a sensor failure
    pub fn push_error(&mut self, error: LocationError) {
        self.queue.push_back(Err(error));
    }

    /// Make the next `start` call fail
    pub fn fail_start(&mut self, error: LocationError) {
        self.start_error = Some(error);
    }

    /// Simulate losing the sensor. The loss is reported once as `Unavailable`.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.loss_reported = false;
    }

    /// Restore the sensor after `disconnect`
    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    /// Events not yet polled
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Samples returned by `poll` so far
    pub fn samples_delivered(&self) -> u32 {
        self.samples_delivered
    }

    /// Errors returned by `poll` so far
    pub fn errors_delivered(&self) -> u32 {
        self.errors_delivered
    }
}

impl Default for MockLocationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource for MockLocationSource {
    fn start(&mut self) -> LocationResult<()> {
        if let Some(error) = self.start_error.take() {
            return Err(error);
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn poll(&mut self) -> LocationResult<Option<PositionSample>> {
        if !self.active {
            return Ok(None);
        }

        if !self.connected {
            if self.loss_reported {
                return Ok(None);
            }
            self.loss_reported = true;
            self.errors_delivered += 1;
            return Err(LocationError::Unavailable);
        }

        match self.queue.pop_front() {
            Some(Ok(sample)) => {
                self.samples_delivered += 1;
                Ok(Some(sample))
            }
            Some(Err(error)) => {
                self.errors_delivered += 1;
                Err(error)
            }
            None => Ok(None),
        }
    }
}
