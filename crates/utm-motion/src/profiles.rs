//! Tunable motion parameters.
//!
//! Consolidates every constant the motion model reads so the engine
//! configuration can override them as one unit.

use serde::{Deserialize, Serialize};

use utm_core::constants::*;

/// Motion tuning shared by all simulated flights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    /// Progress added per tick in auto mode.
    pub progress_increment: f64,
    /// Progress multiplier while returning to launch.
    pub rtl_progress_factor: f64,
    /// Cruise altitude (m).
    pub cruise_altitude: f64,
    /// Fraction of the route at each end spent climbing or descending.
    pub altitude_ramp_fraction: f64,
    /// Maximum altitude change per tick (m).
    pub altitude_rate: f64,
    /// Maximum altitude change per tick in emergency mode (m).
    pub emergency_altitude_rate: f64,
    /// Base cruise ground speed.
    pub base_speed: f64,
    /// Fraction of the route at each end flown at climb speed.
    pub climb_phase_fraction: f64,
    /// Speed multiplier during climb and descent.
    pub climb_speed_factor: f64,
    /// Relative amplitude of the cruise speed wobble.
    pub cruise_speed_variation: f64,
    /// Wobble cycles per traversal.
    pub cruise_speed_cycles: f64,
    /// Speed multiplier while returning to launch.
    pub rtl_speed_factor: f64,
    pub battery_floor: f64,
    pub battery_seed_min: f64,
    pub battery_seed_max: f64,
    pub drain_cruise: f64,
    pub drain_climb_descent: f64,
    pub drain_hold: f64,
    pub drain_emergency: f64,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            progress_increment: PROGRESS_INCREMENT,
            rtl_progress_factor: RTL_PROGRESS_FACTOR,
            cruise_altitude: CRUISE_ALTITUDE,
            altitude_ramp_fraction: ALTITUDE_RAMP_FRACTION,
            altitude_rate: ALTITUDE_RATE,
            emergency_altitude_rate: EMERGENCY_ALTITUDE_RATE,
            base_speed: BASE_SPEED,
            climb_phase_fraction: CLIMB_PHASE_FRACTION,
            climb_speed_factor: CLIMB_SPEED_FACTOR,
            cruise_speed_variation: CRUISE_SPEED_VARIATION,
            cruise_speed_cycles: CRUISE_SPEED_CYCLES,
            rtl_speed_factor: RTL_SPEED_FACTOR,
            battery_floor: BATTERY_FLOOR,
            battery_seed_min: BATTERY_SEED_MIN,
            battery_seed_max: BATTERY_SEED_MAX,
            drain_cruise: DRAIN_CRUISE,
            drain_climb_descent: DRAIN_CLIMB_DESCENT,
            drain_hold: DRAIN_HOLD,
            drain_emergency: DRAIN_EMERGENCY,
        }
    }
}
