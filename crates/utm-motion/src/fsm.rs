//! Flight-mode finite state machine.
//!
//! `apply_command` maps an operator command onto the next mode; `evaluate`
//! advances one flight by one tick in its current mode. Both operate on
//! plain data.

use utm_core::commands::FlightCommand;
use utm_core::enums::{Direction, FlightMode};
use utm_core::types::GeoPoint;

use crate::model;
use crate::profiles::MotionProfile;

/// Input to the FSM for a single flight.
#[derive(Debug, Clone, Copy)]
pub struct FlightContext {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub mode: FlightMode,
    pub progress: f64,
    pub direction: Direction,
    pub target_altitude: f64,
    pub current_altitude: f64,
    pub battery: f64,
    pub heading: f64,
}

/// Output from the FSM for a single flight.
#[derive(Debug, Clone, Copy)]
pub struct FlightUpdate {
    pub mode: FlightMode,
    pub progress: f64,
    pub direction: Direction,
    pub target_altitude: f64,
    pub current_altitude: f64,
    pub battery: f64,
    pub position: GeoPoint,
    pub heading: f64,
    pub ground_speed: f64,
    /// Set when the tick itself changed the mode (rtl arrival).
    pub mode_changed: bool,
}

/// Mode a flight enters when `command` arrives in `mode`.
///
/// Returns the current mode when the command does not apply, so repeating a
/// command is harmless. Landing and emergency only accept `Takeoff`.
pub fn apply_command(mode: FlightMode, command: FlightCommand) -> FlightMode {
    if mode.is_terminal() && command != FlightCommand::Takeoff {
        return mode;
    }
    match command {
        FlightCommand::Takeoff => FlightMode::Auto,
        FlightCommand::Resume => {
            if mode.is_holding() {
                FlightMode::Auto
            } else {
                mode
            }
        }
        FlightCommand::Pause => FlightMode::Paused,
        FlightCommand::Hover => FlightMode::Hover,
        FlightCommand::Land => FlightMode::Landing,
        FlightCommand::Rtl => FlightMode::Rtl,
        FlightCommand::EmergencyStop => FlightMode::Emergency,
    }
}

/// Advance one flight by one tick.
pub fn evaluate(ctx: &FlightContext, profile: &MotionProfile) -> FlightUpdate {
    let mut mode = ctx.mode;
    let mut progress = ctx.progress;
    let mut direction = ctx.direction;
    let mut heading = ctx.heading;

    match ctx.mode {
        FlightMode::Auto => {
            (progress, direction) =
                model::advance_progress(progress, direction, profile.progress_increment);
            heading = model::heading(&ctx.start, &ctx.end, direction);
        }
        FlightMode::Rtl => {
            let step = profile.progress_increment * profile.rtl_progress_factor;
            progress = (progress - step).max(0.0);
            direction = Direction::Backward;
            if progress <= 0.0 {
                // Back at the launch point: the next outbound leg starts forward.
                progress = 0.0;
                direction = Direction::Forward;
                mode = FlightMode::Landing;
            }
            heading = model::heading(&ctx.start, &ctx.end, direction);
        }
        FlightMode::Paused | FlightMode::Hover | FlightMode::Landing | FlightMode::Emergency => {}
    }

    let target_altitude = model::target_altitude(mode, progress, ctx.target_altitude, profile);
    let current_altitude = model::ramp_altitude(
        ctx.current_altitude,
        target_altitude,
        model::altitude_rate(mode, profile),
    );
    let ground_speed = model::ground_speed(mode, progress, profile);
    let drain = model::battery_drain(ctx.mode, progress, profile);
    let battery = model::drain_battery(ctx.battery, drain, profile);

    FlightUpdate {
        mode,
        progress,
        direction,
        target_altitude,
        current_altitude,
        battery,
        position: model::interpolate_position(&ctx.start, &ctx.end, progress),
        heading,
        ground_speed,
        mode_changed: mode != ctx.mode,
    }
}
