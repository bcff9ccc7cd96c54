//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Flight-mode state of a simulated flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightMode {
    /// Following the route, reversing at each endpoint.
    #[default]
    Auto,
    /// Holding position on operator request.
    Paused,
    /// Holding position; behaves exactly like `Paused`.
    Hover,
    /// Descending in place to the ground.
    Landing,
    /// Returning along the route to the start endpoint.
    Rtl,
    /// Emergency descent in place.
    Emergency,
}

impl FlightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightMode::Auto => "auto",
            FlightMode::Paused => "paused",
            FlightMode::Hover => "hover",
            FlightMode::Landing => "landing",
            FlightMode::Rtl => "rtl",
            FlightMode::Emergency => "emergency",
        }
    }

    /// Modes in which progress along the route changes.
    pub fn is_moving(&self) -> bool {
        matches!(self, FlightMode::Auto | FlightMode::Rtl)
    }

    /// Position-hold modes.
    pub fn is_holding(&self) -> bool {
        matches!(self, FlightMode::Paused | FlightMode::Hover)
    }

    /// Modes that only `takeoff` (or removal) can leave.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightMode::Landing | FlightMode::Emergency)
    }
}

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel along the two-point route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward the end endpoint (progress increasing).
    #[default]
    Forward,
    /// Toward the start endpoint (progress decreasing).
    Backward,
}

impl Direction {
    /// +1.0 forward, -1.0 backward.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reversed(&self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Flight phase derived from route progress, used for speed and battery drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    Climb,
    Cruise,
    Descent,
}
