//! Entity spawn factory for simulated flights.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use utm_core::commands::FlightRegistration;
use utm_core::components::*;
use utm_core::enums::{Direction, FlightMode};

use utm_motion::model;
use utm_motion::profiles::MotionProfile;

/// Spawn a flight at the start of its route: auto mode, forward, on the
/// ground, battery seeded in the profile's seed range.
pub fn spawn_flight(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    registration: FlightRegistration,
    profile: &MotionProfile,
) -> Entity {
    let route = Route {
        start: registration.start,
        end: registration.end,
    };
    let battery = Battery {
        level: seed_battery(rng, profile),
    };
    let kinematics = Kinematics {
        position: route.start,
        heading: model::heading(&route.start, &route.end, Direction::Forward),
        ground_speed: 0.0,
    };

    world.spawn((
        FlightIdentity {
            flight_id: registration.flight_id,
            drone_id: registration.drone_id,
            flight_number: registration.flight_number,
        },
        route,
        Navigation {
            progress: 0.0,
            direction: Direction::Forward,
            mode: FlightMode::Auto,
        },
        Altitude::default(),
        battery,
        kinematics,
    ))
}

fn seed_battery(rng: &mut ChaCha8Rng, profile: &MotionProfile) -> f64 {
    if profile.battery_seed_max > profile.battery_seed_min {
        rng.gen_range(profile.battery_seed_min..=profile.battery_seed_max)
    } else {
        profile.battery_seed_max
    }
}
