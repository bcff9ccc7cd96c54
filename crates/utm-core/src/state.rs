//! Flight state views: telemetry published every tick and full flight records.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, FlightMode};
use crate::types::{DroneId, FlightId, GeoPoint};

/// Per-tick, per-flight output written to the telemetry store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub flight_id: FlightId,
    pub drone_id: DroneId,
    pub flight_number: String,
    pub position: GeoPoint,
    /// Degrees [0, 360), 0 = North.
    pub heading: f64,
    /// Rounded altitude (meters).
    pub altitude: u32,
    /// Rounded ground speed (km/h).
    pub ground_speed: u32,
    /// Rounded battery percentage.
    pub battery: u8,
    pub mode: FlightMode,
    /// Tick that produced this snapshot.
    pub tick: u64,
}

/// Complete state of one simulated flight, unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedFlight {
    pub flight_id: FlightId,
    pub drone_id: DroneId,
    pub flight_number: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub progress: f64,
    pub direction: Direction,
    pub mode: FlightMode,
    pub battery_level: f64,
    pub target_altitude: f64,
    pub current_altitude: f64,
    pub position: GeoPoint,
    pub heading: f64,
    pub ground_speed: f64,
}
