//! Live flight simulation service.
//!
//! Wraps the headless `SimulationEngine` in a shared, cloneable handle and
//! drives it from a fixed-interval tick loop thread. Callers register and
//! remove flights, inject commands, and start or stop the loop; telemetry
//! lands in the `TelemetrySink` the service was built with.

pub mod config;
pub mod errors;
pub mod game_loop;
pub mod logging;
pub mod service;
pub mod sink;
pub mod state;

pub use errors::{LiveError, LiveResult};
pub use service::FlightSimService;
pub use utm_core as core;
pub use utm_sim as sim;
