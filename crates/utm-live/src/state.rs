//! Service state shared between caller threads and the tick loop.

use serde::Serialize;

use utm_core::types::FlightId;

/// Commands sent from the service handle to the tick loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Run one tick now, outside the regular schedule.
    TickNow,
    /// Shut down the tick loop thread gracefully.
    Shutdown,
}

/// Lifecycle of the tick loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Created, never started.
    #[default]
    Idle,
    Running,
    /// Started at least once, currently not ticking.
    Stopped,
}

/// Outcome of reconciling the registry with an upstream active-flight list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub added: Vec<FlightId>,
    pub removed: Vec<FlightId>,
}
