//! Simulation engine for the UTM flight-motion simulation.
//!
//! Owns the hecs ECS world of simulated flights, advances them one tick at a
//! time with the motion model, and publishes telemetry through a sink port.

pub mod engine;
pub mod errors;
pub mod sink;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use errors::{SimError, SimResult};
pub use sink::{TelemetrySink, TelemetryStore};
pub use utm_core as core;
