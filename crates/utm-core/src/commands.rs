//! Operator commands injected into running flights, and flight registrations.
//!
//! Commands arrive from the dashboard as strings; they are parsed once at the
//! boundary and handled as enums everywhere else.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DroneId, FlightId, GeoPoint};

/// All commands an operator can send to a simulated flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightCommand {
    /// Resume route following from any mode.
    Takeoff,
    /// Descend in place.
    Land,
    /// Return to the start endpoint, then land.
    Rtl,
    /// Emergency descent in place.
    EmergencyStop,
    /// Hold position.
    Pause,
    /// Hold position.
    Hover,
    /// Leave a position hold.
    Resume,
}

impl FlightCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightCommand::Takeoff => "takeoff",
            FlightCommand::Land => "land",
            FlightCommand::Rtl => "rtl",
            FlightCommand::EmergencyStop => "emergency_stop",
            FlightCommand::Pause => "pause",
            FlightCommand::Hover => "hover",
            FlightCommand::Resume => "resume",
        }
    }
}

/// Command string that does not name any [`FlightCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flight command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for FlightCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "takeoff" => Ok(FlightCommand::Takeoff),
            "land" => Ok(FlightCommand::Land),
            "rtl" => Ok(FlightCommand::Rtl),
            "emergency_stop" => Ok(FlightCommand::EmergencyStop),
            "pause" => Ok(FlightCommand::Pause),
            "hover" => Ok(FlightCommand::Hover),
            "resume" => Ok(FlightCommand::Resume),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// Everything needed to start simulating a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRegistration {
    pub flight_id: FlightId,
    pub drone_id: DroneId,
    pub flight_number: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl FlightRegistration {
    pub fn new(
        flight_id: impl Into<FlightId>,
        drone_id: impl Into<DroneId>,
        flight_number: impl Into<String>,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Self {
        Self {
            flight_id: flight_id.into(),
            drone_id: drone_id.into(),
            flight_number: flight_number.into(),
            start,
            end,
        }
    }
}
