//! Events emitted by the simulation for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::commands::FlightCommand;
use crate::enums::FlightMode;
use crate::types::FlightId;

/// What caused a mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionCause {
    /// An operator command.
    Command { command: FlightCommand },
    /// Return-to-launch reached the start endpoint.
    ReachedLaunch,
}

/// A flight changed mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTransition {
    pub flight_id: FlightId,
    pub from: FlightMode,
    pub to: FlightMode,
    pub cause: TransitionCause,
    /// Tick count at the time of the change.
    pub tick: u64,
}
