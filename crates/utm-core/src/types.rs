//! Fundamental geographic and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planar view of the coordinate: x = latitude, y = longitude.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.lat, self.lon)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Self { lat: v.x, lon: v.y }
    }

    /// Bearing to another point in degrees [0, 360), 0 = North, clockwise.
    ///
    /// Flat-earth approximation on raw degree deltas. Coincident points yield 0.
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        d_lon.atan2(d_lat).to_degrees().rem_euclid(360.0)
    }
}

/// Identifier of a flight as issued by the upstream flight service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub String);

/// Identifier of the drone flying a flight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DroneId(pub String);

impl FlightId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DroneId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FlightId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FlightId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DroneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DroneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DroneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks executed since the engine was created or cleared.
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
