//! Kinematic and battery functions for a single flight.

use std::f64::consts::TAU;

use utm_core::enums::{Direction, FlightMode, FlightPhase};
use utm_core::types::GeoPoint;

use crate::profiles::MotionProfile;

/// Linear interpolation of latitude and longitude between the endpoints.
/// No great-circle correction.
pub fn interpolate_position(start: &GeoPoint, end: &GeoPoint, progress: f64) -> GeoPoint {
    let a = start.as_dvec2();
    GeoPoint::from_dvec2(a + (end.as_dvec2() - a) * progress)
}

/// Bearing from the endpoint behind the flight to the one ahead of it.
pub fn heading(start: &GeoPoint, end: &GeoPoint, direction: Direction) -> f64 {
    match direction {
        Direction::Forward => start.bearing_to(end),
        Direction::Backward => end.bearing_to(start),
    }
}

/// Climb / cruise / descent classification used for speed and drain.
pub fn flight_phase(progress: f64, profile: &MotionProfile) -> FlightPhase {
    if progress < profile.climb_phase_fraction {
        FlightPhase::Climb
    } else if progress > 1.0 - profile.climb_phase_fraction {
        FlightPhase::Descent
    } else {
        FlightPhase::Cruise
    }
}

/// Target altitude along the route: ramp up, hold cruise, ramp down.
pub fn altitude_profile(progress: f64, profile: &MotionProfile) -> f64 {
    let ramp = profile.altitude_ramp_fraction;
    let cruise = profile.cruise_altitude;
    if ramp <= 0.0 {
        return cruise;
    }
    if progress < ramp {
        cruise * (progress / ramp).max(0.0)
    } else if progress > 1.0 - ramp {
        cruise * ((1.0 - progress) / ramp).max(0.0)
    } else {
        cruise
    }
}

/// Target altitude for a mode. Holding modes keep `previous_target`.
pub fn target_altitude(
    mode: FlightMode,
    progress: f64,
    previous_target: f64,
    profile: &MotionProfile,
) -> f64 {
    match mode {
        FlightMode::Auto | FlightMode::Rtl => altitude_profile(progress, profile),
        FlightMode::Paused | FlightMode::Hover => previous_target,
        FlightMode::Landing | FlightMode::Emergency => 0.0,
    }
}

/// Ground speed along the route in auto mode.
pub fn cruise_speed(progress: f64, profile: &MotionProfile) -> f64 {
    match flight_phase(progress, profile) {
        FlightPhase::Climb | FlightPhase::Descent => {
            profile.base_speed * profile.climb_speed_factor
        }
        FlightPhase::Cruise => {
            let wobble = (progress * profile.cruise_speed_cycles * TAU).sin();
            profile.base_speed * (1.0 + profile.cruise_speed_variation * wobble)
        }
    }
}

/// Ground speed for a mode.
pub fn ground_speed(mode: FlightMode, progress: f64, profile: &MotionProfile) -> f64 {
    match mode {
        FlightMode::Auto => cruise_speed(progress, profile),
        FlightMode::Rtl => cruise_speed(progress, profile) * profile.rtl_speed_factor,
        FlightMode::Paused | FlightMode::Hover | FlightMode::Landing | FlightMode::Emergency => {
            0.0
        }
    }
}

/// Per-tick altitude rate limit for a mode.
pub fn altitude_rate(mode: FlightMode, profile: &MotionProfile) -> f64 {
    match mode {
        FlightMode::Emergency => profile.emergency_altitude_rate,
        _ => profile.altitude_rate,
    }
}

/// Move `current` toward `target` by at most `max_step`, never overshooting.
pub fn ramp_altitude(current: f64, target: f64, max_step: f64) -> f64 {
    current + (target - current).clamp(-max_step, max_step)
}

/// Battery drained during one tick.
pub fn battery_drain(mode: FlightMode, progress: f64, profile: &MotionProfile) -> f64 {
    match mode {
        FlightMode::Auto | FlightMode::Rtl => match flight_phase(progress, profile) {
            FlightPhase::Cruise => profile.drain_cruise,
            FlightPhase::Climb | FlightPhase::Descent => profile.drain_climb_descent,
        },
        FlightMode::Paused | FlightMode::Hover => profile.drain_hold,
        FlightMode::Landing => profile.drain_climb_descent,
        FlightMode::Emergency => profile.drain_emergency,
    }
}

/// Apply one tick of drain, floored at the profile minimum.
pub fn drain_battery(level: f64, drain: f64, profile: &MotionProfile) -> f64 {
    (level - drain).max(profile.battery_floor).min(level)
}

/// Advance progress by `step` in `direction`, reversing at either endpoint.
pub fn advance_progress(progress: f64, direction: Direction, step: f64) -> (f64, Direction) {
    let next = progress + step * direction.sign();
    if next >= 1.0 {
        (1.0, Direction::Backward)
    } else if next <= 0.0 {
        (0.0, Direction::Forward)
    } else {
        (next, direction)
    }
}
