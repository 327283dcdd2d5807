//! Distance algorithms

pub mod haversine;

pub use haversine::{checked_haversine_km, haversine_km};
