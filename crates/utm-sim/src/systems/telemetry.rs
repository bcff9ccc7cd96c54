//! Telemetry system: queries the world and builds one snapshot per flight.
//!
//! This system is read-only.

use hecs::World;

use utm_core::components::*;
use utm_core::state::{SimulatedFlight, TelemetrySnapshot};
use utm_core::types::SimTime;

/// Build telemetry for every flight, sorted by flight id.
pub fn build_snapshots(world: &World, time: &SimTime) -> Vec<TelemetrySnapshot> {
    let mut snapshots: Vec<TelemetrySnapshot> = world
        .query::<(&FlightIdentity, &Navigation, &Altitude, &Battery, &Kinematics)>()
        .iter()
        .map(|(_, (identity, nav, altitude, battery, kinematics))| TelemetrySnapshot {
            flight_id: identity.flight_id.clone(),
            drone_id: identity.drone_id.clone(),
            flight_number: identity.flight_number.clone(),
            position: kinematics.position,
            heading: kinematics.heading,
            altitude: altitude.current.max(0.0).round() as u32,
            ground_speed: kinematics.ground_speed.max(0.0).round() as u32,
            battery: battery.level.clamp(0.0, 100.0).round() as u8,
            mode: nav.mode,
            tick: time.tick,
        })
        .collect();

    snapshots.sort_by(|a, b| a.flight_id.cmp(&b.flight_id));
    snapshots
}

/// Full unrounded state of one flight entity.
pub fn flight_view(world: &World, entity: hecs::Entity) -> Option<SimulatedFlight> {
    let mut query = world
        .query_one::<(&FlightIdentity, &Route, &Navigation, &Altitude, &Battery, &Kinematics)>(
            entity,
        )
        .ok()?;
    let (identity, route, nav, altitude, battery, kinematics) = query.get()?;

    Some(SimulatedFlight {
        flight_id: identity.flight_id.clone(),
        drone_id: identity.drone_id.clone(),
        flight_number: identity.flight_number.clone(),
        start: route.start,
        end: route.end,
        progress: nav.progress,
        direction: nav.direction,
        mode: nav.mode,
        battery_level: battery.level,
        target_altitude: altitude.target,
        current_altitude: altitude.current,
        position: kinematics.position,
        heading: kinematics.heading,
        ground_speed: kinematics.ground_speed,
    })
}
