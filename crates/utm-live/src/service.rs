//! Shared handle to the live flight simulation.
//!
//! Every dashboard view that needs live telemetry holds a clone of the same
//! `FlightSimService`, so all of them see one registry and one tick loop.
//! All operations are synchronous and tolerate unknown ids, duplicate
//! registrations and out-of-order start/stop.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use utm_core::commands::{FlightCommand, FlightRegistration};
use utm_core::constants::MAX_TICK_INTERVAL_MS;
use utm_core::state::SimulatedFlight;
use utm_core::types::FlightId;
use utm_sim::{SimConfig, SimulationEngine, TelemetrySink};

use crate::errors::{LiveError, LiveResult};
use crate::game_loop::{self, LoopHandle};
use crate::state::{ReconcileReport, ServiceStatus};

struct Runner {
    status: ServiceStatus,
    handle: Option<LoopHandle>,
}

struct ServiceInner {
    engine: Arc<Mutex<SimulationEngine>>,
    runner: Mutex<Runner>,
    default_interval: Duration,
}

/// Cloneable handle to one simulation engine and its tick loop.
#[derive(Clone)]
pub struct FlightSimService {
    inner: Arc<ServiceInner>,
}

impl FlightSimService {
    /// Build a service around a fresh engine publishing to `sink`.
    /// The loop is not started.
    pub fn new(config: SimConfig, sink: Arc<dyn TelemetrySink>) -> Self {
        let default_interval = config.tick_interval();
        Self {
            inner: Arc::new(ServiceInner {
                engine: Arc::new(Mutex::new(SimulationEngine::new(config, sink))),
                runner: Mutex::new(Runner {
                    status: ServiceStatus::Idle,
                    handle: None,
                }),
                default_interval,
            }),
        }
    }

    // --- registry ---

    /// Start simulating a flight; no-op if the id is already registered.
    pub fn register_flight(&self, registration: FlightRegistration) -> bool {
        self.engine().register_flight(registration)
    }

    /// Stop simulating a flight and retract its telemetry; no-op for unknown ids.
    pub fn remove_flight(&self, flight_id: &FlightId) -> bool {
        self.engine().remove_flight(flight_id)
    }

    /// Ids of all registered flights, sorted.
    pub fn registered_flight_ids(&self) -> Vec<FlightId> {
        self.engine().registered_flight_ids()
    }

    pub fn flight(&self, flight_id: &FlightId) -> Option<SimulatedFlight> {
        self.engine().flight(flight_id)
    }

    /// Bring the registry in line with the upstream list of active flights:
    /// register the new ones, remove those no longer listed.
    pub fn reconcile(&self, active: &[FlightRegistration]) -> ReconcileReport {
        let mut engine = self.engine();
        let wanted: HashSet<&FlightId> = active.iter().map(|r| &r.flight_id).collect();

        let mut report = ReconcileReport::default();
        for flight_id in engine.registered_flight_ids() {
            if !wanted.contains(&flight_id) && engine.remove_flight(&flight_id) {
                report.removed.push(flight_id);
            }
        }
        for registration in active {
            let flight_id = registration.flight_id.clone();
            if engine.register_flight(registration.clone()) {
                report.added.push(flight_id);
            }
        }
        debug!(
            added = report.added.len(),
            removed = report.removed.len(),
            "reconciled active flights"
        );
        report
    }

    // --- commands ---

    /// Apply an operator command; the next tick reflects it.
    pub fn execute_command(&self, flight_id: &FlightId, command: FlightCommand) -> bool {
        self.engine().execute_command(flight_id, command)
    }

    /// Parse and apply a command string. Unknown strings are ignored.
    pub fn execute_command_str(&self, flight_id: &FlightId, command: &str) -> bool {
        match command.parse::<FlightCommand>() {
            Ok(command) => self.execute_command(flight_id, command),
            Err(e) => {
                debug!(flight_id = %flight_id, "{e}, ignoring");
                false
            }
        }
    }

    // --- lifecycle ---

    /// Start the tick loop at the configured interval.
    pub fn start(&self) -> LiveResult<()> {
        self.start_with_interval(self.inner.default_interval)
    }

    /// Start the tick loop if it is not already running. The first tick runs
    /// right after the loop thread starts, then once per `interval`.
    /// `interval` must be non-zero and at most one hour.
    pub fn start_with_interval(&self, interval: Duration) -> LiveResult<()> {
        if interval.is_zero() || interval > Duration::from_millis(MAX_TICK_INTERVAL_MS) {
            return Err(LiveError::InvalidInterval(interval));
        }

        let mut runner = self.runner();
        if runner.handle.is_some() {
            debug!("start while running ignored");
            return Ok(());
        }

        let handle = game_loop::spawn_tick_loop(self.inner.engine.clone(), interval)?;
        runner.handle = Some(handle);
        runner.status = ServiceStatus::Running;
        info!(interval_ms = interval.as_millis() as u64, "simulation started");
        Ok(())
    }

    /// Cancel the tick loop. Registered flights are kept.
    pub fn stop(&self) {
        let mut runner = self.runner();
        if let Some(handle) = runner.handle.take() {
            handle.shutdown();
            runner.status = ServiceStatus::Stopped;
            info!("simulation stopped");
        }
    }

    /// Stop, drop every flight and clear all published telemetry.
    pub fn clear(&self) {
        self.stop();
        self.engine().clear();
        info!("simulation cleared");
    }

    /// Teardown: same as `clear`, consuming this handle.
    pub fn shutdown(self) {
        self.clear();
    }

    /// Run one tick right now: through the loop when running, inline otherwise.
    pub fn tick_now(&self) {
        let runner = self.runner();
        match runner.handle.as_ref() {
            Some(handle) => handle.tick_now(),
            None => game_loop::tick_once(&self.inner.engine),
        }
    }

    pub fn status(&self) -> ServiceStatus {
        self.runner().status
    }

    pub fn is_running(&self) -> bool {
        self.status() == ServiceStatus::Running
    }

    /// Ticks executed since creation or the last `clear`.
    pub fn tick_count(&self) -> u64 {
        self.engine().time().tick
    }

    fn engine(&self) -> MutexGuard<'_, SimulationEngine> {
        self.inner.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the runner, first reaping a loop thread that exited on its own
    /// so status and `start` see it as stopped.
    fn runner(&self) -> MutexGuard<'_, Runner> {
        let mut runner = self.inner.runner.lock().unwrap_or_else(PoisonError::into_inner);
        if runner.handle.as_ref().is_some_and(LoopHandle::is_finished) {
            if let Some(handle) = runner.handle.take() {
                handle.shutdown();
            }
            runner.status = ServiceStatus::Stopped;
            warn!("tick loop exited unexpectedly, marked stopped");
        }
        runner
    }
}
