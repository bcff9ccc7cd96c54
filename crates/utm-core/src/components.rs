//! ECS components for hecs flight entities.
//!
//! Components are plain data structs with no methods.
//! Flight logic lives in the motion model and systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{DroneId, FlightId, GeoPoint};

/// Immutable identifiers of a simulated flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightIdentity {
    pub flight_id: FlightId,
    pub drone_id: DroneId,
    pub flight_number: String,
}

/// Route endpoints. Never mutated after spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Route {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

/// Where the flight is along its route and what it is doing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Navigation {
    /// 0.0 = start endpoint, 1.0 = end endpoint.
    pub progress: f64,
    pub direction: Direction,
    pub mode: FlightMode,
}

/// Commanded and actual altitude.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Altitude {
    pub target: f64,
    pub current: f64,
}

/// Remaining battery in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Battery {
    pub level: f64,
}

/// Derived per-tick outputs of the motion model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: GeoPoint,
    /// Degrees [0, 360), retained while not moving.
    pub heading: f64,
    pub ground_speed: f64,
}
