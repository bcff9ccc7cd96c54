//! Per-tick passes over the flight world.
//!
//! `motion` steps every flight through its mode; `telemetry` reads the
//! result back out as snapshots.

pub mod motion;
pub mod telemetry;
