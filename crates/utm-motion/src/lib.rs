//! Flight motion model for the UTM simulation.
//!
//! Pure functions for position, heading, altitude, speed and battery,
//! plus the per-mode step function that advances one flight by one tick.
//! No ECS dependency, no internal state.

pub mod fsm;
pub mod model;
pub mod profiles;

pub use utm_core as core;

#[cfg(test)]
mod tests;
