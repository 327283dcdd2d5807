//! Location source abstraction
//!
//! This module isolates the platform location sensor behind the
//! [`LocationSource`] trait, with a channel-backed implementation for
//! callback-driven platforms and a scripted mock for tests.

pub mod source;
pub mod channel;
pub mod mock;
pub mod error;

pub use source::LocationSource;
pub use channel::{location_channel, ChannelLocationSource, LocationSender};
pub use mock::MockLocationSource;
pub use error::{LocationError, LocationResult};
