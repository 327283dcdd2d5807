//! Channel-backed location source
//!
//! Platform callbacks push samples and errors through a [`LocationSender`],
//! possibly from another thread. The owning session drains them in order
//! through the [`LocationSource`] interface, so tracker updates stay serialized.

use crate::core::PositionSample;
use crate::hardware::{LocationError, LocationResult, LocationSource};
use log::warn;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Create a connected sender/source pair
pub fn location_channel() -> (LocationSender, ChannelLocationSource) {
    let (tx, rx) = mpsc::channel();
    (
        LocationSender { tx },
        ChannelLocationSource {
            rx,
            active: false,
            closed: false,
        },
    )
}

/// Writing end handed to the platform sensor callback
#[derive(Debug, Clone)]
pub struct LocationSender {
    tx: Sender<LocationResult<PositionSample>>,
}

impl LocationSender {
    /// Push a sample; returns false once the source has been dropped
    pub fn send_sample(&self, sample: PositionSample) -> bool {
        self.tx.send(Ok(sample)).is_ok()
    }

    /// Push a sensor failure; returns false once the source has been dropped
    pub fn send_error(&self, error: LocationError) -> bool {
        self.tx.send(Err(error)).is_ok()
    }
}

/// Reading end owned by the session
#[derive(Debug)]
pub struct ChannelLocationSource {
    rx: Receiver<LocationResult<PositionSample>>,
    active: bool,
    closed: bool,
}

impl LocationSource for ChannelLocationSource {
    fn start(&mut self) -> LocationResult<()> {
        if self.closed {
            return Err(LocationError::Unavailable);
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
        while self.rx.try_recv().is_ok() {}
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn poll(&mut self) -> LocationResult<Option<PositionSample>> {
        if !self.active {
            return Ok(None);
        }

        match self.rx.try_recv() {
            Ok(event) => event.map(Some),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                warn!("All location senders dropped, stopping source");
                self.closed = true;
                self.active = false;
                Err(LocationError::Unavailable)
            }
        }
    }
}
