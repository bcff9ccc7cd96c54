//! Simulation engine. Owns every simulated flight.
//!
//! `SimulationEngine` owns the hecs world of flights, applies operator
//! commands, advances all flights once per `tick`, and publishes the resulting
//! telemetry through its `TelemetrySink`. Completely headless (no timer, no
//! thread), which keeps it deterministic under test.
//!
//! Every mutating operation tolerates unknown ids and repeated calls: callers
//! are reactive views that cannot guarantee call ordering.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use utm_core::commands::{FlightCommand, FlightRegistration};
use utm_core::components::Navigation;
use utm_core::constants::{DEFAULT_SEED, DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS};
use utm_core::events::{ModeTransition, TransitionCause};
use utm_core::state::{SimulatedFlight, TelemetrySnapshot};
use utm_core::types::{FlightId, SimTime};

use utm_motion::fsm::apply_command;
use utm_motion::profiles::MotionProfile;

use crate::errors::{invalid_config, SimResult};
use crate::sink::TelemetrySink;
use crate::systems;
use crate::world_setup;

/// Configuration for the simulation engine and its tick loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for battery seeding. Same seed = same simulation.
    pub seed: u64,
    /// Interval between ticks when driven by a live loop.
    pub tick_interval_ms: u64,
    /// Motion tuning.
    pub motion: MotionProfile,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            motion: MotionProfile::default(),
        }
    }
}

impl SimConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject values that would break the progress or battery invariants.
    pub fn validate(&self) -> SimResult<()> {
        let m = &self.motion;
        if !(1..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(invalid_config(format!(
                "tick_interval_ms must be in [1, {MAX_TICK_INTERVAL_MS}], got {}",
                self.tick_interval_ms
            )));
        }
        if !(m.progress_increment > 0.0 && m.progress_increment <= 1.0) {
            return Err(invalid_config(format!(
                "progress_increment must be in (0, 1], got {}",
                m.progress_increment
            )));
        }
        if m.rtl_progress_factor <= 0.0 {
            return Err(invalid_config("rtl_progress_factor must be > 0"));
        }
        if m.cruise_altitude < 0.0 || m.altitude_rate <= 0.0 || m.emergency_altitude_rate <= 0.0 {
            return Err(invalid_config(
                "cruise_altitude must be >= 0 and altitude rates > 0",
            ));
        }
        if !(0.0..=0.5).contains(&m.altitude_ramp_fraction)
            || !(0.0..=0.5).contains(&m.climb_phase_fraction)
        {
            return Err(invalid_config("ramp and climb fractions must be in [0, 0.5]"));
        }
        if m.base_speed < 0.0 {
            return Err(invalid_config("base_speed must be >= 0"));
        }
        if m.battery_seed_min > m.battery_seed_max
            || m.battery_seed_max > 100.0
            || m.battery_floor < 0.0
            || m.battery_floor > m.battery_seed_min
        {
            return Err(invalid_config(format!(
                "battery bounds must satisfy 0 <= floor <= seed_min <= seed_max <= 100, got {} / {} / {}",
                m.battery_floor, m.battery_seed_min, m.battery_seed_max
            )));
        }
        let drains = [
            m.drain_cruise,
            m.drain_climb_descent,
            m.drain_hold,
            m.drain_emergency,
        ];
        if drains.iter().any(|d| *d < 0.0) {
            return Err(invalid_config("drain rates must be >= 0"));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all flight state.
pub struct SimulationEngine {
    world: World,
    /// One entity per flight id.
    index: HashMap<FlightId, Entity>,
    time: SimTime,
    rng: ChaCha8Rng,
    config: SimConfig,
    sink: Arc<dyn TelemetrySink>,
    transitions: Vec<ModeTransition>,
}

impl SimulationEngine {
    /// Create a new engine publishing to `sink`.
    pub fn new(config: SimConfig, sink: Arc<dyn TelemetrySink>) -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            sink,
            transitions: Vec::new(),
        }
    }

    /// Start simulating a flight. Returns false (and changes nothing) if the
    /// flight id is already registered.
    pub fn register_flight(&mut self, registration: FlightRegistration) -> bool {
        if self.index.contains_key(&registration.flight_id) {
            debug!(flight_id = %registration.flight_id, "flight already registered, ignoring");
            return false;
        }

        let flight_id = registration.flight_id.clone();
        let entity = world_setup::spawn_flight(
            &mut self.world,
            &mut self.rng,
            registration,
            &self.config.motion,
        );
        self.index.insert(flight_id.clone(), entity);
        debug!(flight_id = %flight_id, "flight registered");
        true
    }

    /// Stop simulating a flight and retract its telemetry. Returns false for
    /// unknown ids.
    pub fn remove_flight(&mut self, flight_id: &FlightId) -> bool {
        let Some(entity) = self.index.remove(flight_id) else {
            debug!(flight_id = %flight_id, "remove for unknown flight ignored");
            return false;
        };
        if let Err(e) = self.world.despawn(entity) {
            warn!(flight_id = %flight_id, "indexed flight had no entity: {e}");
        }
        self.sink.retract(flight_id);
        debug!(flight_id = %flight_id, "flight removed");
        true
    }

    /// Apply an operator command. The next tick reflects the new mode.
    /// Returns false for unknown ids.
    pub fn execute_command(&mut self, flight_id: &FlightId, command: FlightCommand) -> bool {
        let Some(&entity) = self.index.get(flight_id) else {
            debug!(flight_id = %flight_id, command = command.as_str(), "command for unknown flight ignored");
            return false;
        };
        let Ok(mut nav) = self.world.get::<&mut Navigation>(entity) else {
            return false;
        };

        let from = nav.mode;
        let to = apply_command(from, command);
        if to != from {
            nav.mode = to;
            self.transitions.push(ModeTransition {
                flight_id: flight_id.clone(),
                from,
                to,
                cause: TransitionCause::Command { command },
                tick: self.time.tick,
            });
        }
        true
    }

    /// Remove every flight and all published telemetry.
    pub fn clear(&mut self) {
        self.world.clear();
        self.index.clear();
        self.transitions.clear();
        self.sink.clear();
        self.time = SimTime::default();
    }

    /// Advance all flights by one tick, publish, and return the telemetry.
    pub fn tick(&mut self) -> Vec<TelemetrySnapshot> {
        self.time.advance();
        systems::motion::run(
            &mut self.world,
            &self.config.motion,
            self.time.tick,
            &mut self.transitions,
        );

        let snapshots = systems::telemetry::build_snapshots(&self.world, &self.time);
        self.sink.publish_batch(&snapshots);
        trace!(tick = self.time.tick, flights = snapshots.len(), "tick complete");
        snapshots
    }

    /// Ids of all registered flights, sorted.
    pub fn registered_flight_ids(&self) -> Vec<FlightId> {
        let mut ids: Vec<FlightId> = self.index.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_registered(&self, flight_id: &FlightId) -> bool {
        self.index.contains_key(flight_id)
    }

    /// Full state of one flight.
    pub fn flight(&self, flight_id: &FlightId) -> Option<SimulatedFlight> {
        let entity = *self.index.get(flight_id)?;
        systems::telemetry::flight_view(&self.world, entity)
    }

    pub fn flight_count(&self) -> usize {
        self.index.len()
    }

    /// Mode changes since the last call.
    pub fn take_transitions(&mut self) -> Vec<ModeTransition> {
        std::mem::take(&mut self.transitions)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TelemetryStore;
    use utm_core::types::GeoPoint;

    #[test]
    fn test_remove_survives_missing_entity() {
        let store = Arc::new(TelemetryStore::new());
        let mut engine = SimulationEngine::new(SimConfig::default(), store.clone());
        engine.register_flight(FlightRegistration::new(
            "F1",
            "D1",
            "UTM-001",
            GeoPoint::new(37.0, -122.0),
            GeoPoint::new(37.1, -122.1),
        ));
        engine.tick();

        let flight_id = FlightId::from("F1");
        let entity = engine.index[&flight_id];
        engine.world.despawn(entity).unwrap();

        assert!(engine.remove_flight(&flight_id));
        assert!(!store.contains(&flight_id));
        assert!(!engine.is_registered(&flight_id));
    }
}
