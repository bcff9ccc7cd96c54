//! Telemetry sink port and the in-memory telemetry store.
//!
//! The engine is the only writer for simulated flights. Each tick publishes
//! the whole batch in one call so readers never see a half-updated tick.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use utm_core::state::TelemetrySnapshot;
use utm_core::types::FlightId;

/// Outbound port for per-tick telemetry.
pub trait TelemetrySink: Send + Sync {
    /// Upsert the entry for `snapshot.flight_id`.
    fn publish(&self, snapshot: &TelemetrySnapshot);

    /// Upsert all entries of one tick.
    fn publish_batch(&self, snapshots: &[TelemetrySnapshot]) {
        for snapshot in snapshots {
            self.publish(snapshot);
        }
    }

    /// Delete the entry for `flight_id`, if any.
    fn retract(&self, flight_id: &FlightId);

    /// Delete all entries.
    fn clear(&self);
}

/// Shared map of the latest telemetry per flight, read by dashboard views.
#[derive(Debug, Default)]
pub struct TelemetryStore {
    entries: RwLock<HashMap<FlightId, TelemetrySnapshot>>,
}

impl TelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flight_id: &FlightId) -> Option<TelemetrySnapshot> {
        self.read(|entries| entries.get(flight_id).cloned())
    }

    pub fn contains(&self, flight_id: &FlightId) -> bool {
        self.read(|entries| entries.contains_key(flight_id))
    }

    pub fn len(&self) -> usize {
        self.read(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, sorted by flight id.
    pub fn all(&self) -> Vec<TelemetrySnapshot> {
        let mut all: Vec<TelemetrySnapshot> = self.read(|entries| entries.values().cloned().collect());
        all.sort_by(|a, b| a.flight_id.cmp(&b.flight_id));
        all
    }

    fn read<R>(&self, f: impl FnOnce(&HashMap<FlightId, TelemetrySnapshot>) -> R) -> R {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f(&entries)
    }

    fn write<R>(&self, f: impl FnOnce(&mut HashMap<FlightId, TelemetrySnapshot>) -> R) -> R {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl TelemetrySink for TelemetryStore {
    fn publish(&self, snapshot: &TelemetrySnapshot) {
        self.write(|entries| {
            entries.insert(snapshot.flight_id.clone(), snapshot.clone());
        });
    }

    fn publish_batch(&self, snapshots: &[TelemetrySnapshot]) {
        self.write(|entries| {
            for snapshot in snapshots {
                entries.insert(snapshot.flight_id.clone(), snapshot.clone());
            }
        });
    }

    fn retract(&self, flight_id: &FlightId) {
        self.write(|entries| {
            entries.remove(flight_id);
        });
    }

    fn clear(&self) {
        self.write(|entries| entries.clear());
    }
}
