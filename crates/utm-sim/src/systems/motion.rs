//! Motion system. Advances every flight by one tick.
//!
//! Calls the flight FSM from utm-motion for each flight and writes the
//! result back into its components.

use hecs::World;

use utm_core::components::*;
use utm_core::events::{ModeTransition, TransitionCause};

use utm_motion::fsm::{evaluate, FlightContext};
use utm_motion::profiles::MotionProfile;

/// Run one motion step for all flights.
pub fn run(
    world: &mut World,
    profile: &MotionProfile,
    current_tick: u64,
    transitions: &mut Vec<ModeTransition>,
) {
    for (_entity, (identity, route, nav, altitude, battery, kinematics)) in world.query_mut::<(
        &FlightIdentity,
        &Route,
        &mut Navigation,
        &mut Altitude,
        &mut Battery,
        &mut Kinematics,
    )>() {
        let ctx = FlightContext {
            start: route.start,
            end: route.end,
            mode: nav.mode,
            progress: nav.progress,
            direction: nav.direction,
            target_altitude: altitude.target,
            current_altitude: altitude.current,
            battery: battery.level,
            heading: kinematics.heading,
        };

        let update = evaluate(&ctx, profile);

        if update.mode_changed {
            transitions.push(ModeTransition {
                flight_id: identity.flight_id.clone(),
                from: nav.mode,
                to: update.mode,
                cause: TransitionCause::ReachedLaunch,
                tick: current_tick,
            });
        }

        nav.mode = update.mode;
        nav.progress = update.progress;
        nav.direction = update.direction;
        altitude.target = update.target_altitude;
        altitude.current = update.current_altitude;
        battery.level = update.battery;
        kinematics.position = update.position;
        kinematics.heading = update.heading;
        kinematics.ground_speed = update.ground_speed;
    }
}
