//! JSON-lines telemetry sink.
//!
//! Writes one JSON object per published snapshot or retraction, for piping
//! telemetry into other tools.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::warn;

use utm_core::state::TelemetrySnapshot;
use utm_core::types::FlightId;
use utm_sim::TelemetrySink;

#[derive(Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum SinkRecord<'a> {
    Publish { telemetry: &'a TelemetrySnapshot },
    Retract { flight_id: &'a FlightId },
    Clear,
}

/// Telemetry sink writing JSON lines to any writer.
pub struct JsonLineSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLineSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_records<'a>(&self, records: impl IntoIterator<Item = SinkRecord<'a>>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for record in records {
            let result = serde_json::to_writer(&mut *out, &record)
                .map_err(std::io::Error::from)
                .and_then(|_| out.write_all(b"\n"));
            if let Err(e) = result {
                warn!("failed to write telemetry record: {e}");
                return;
            }
        }
        if let Err(e) = out.flush() {
            warn!("failed to flush telemetry output: {e}");
        }
    }
}

impl<W: Write + Send> TelemetrySink for JsonLineSink<W> {
    fn publish(&self, snapshot: &TelemetrySnapshot) {
        self.write_records([SinkRecord::Publish {
            telemetry: snapshot,
        }]);
    }

    fn publish_batch(&self, snapshots: &[TelemetrySnapshot]) {
        self.write_records(
            snapshots
                .iter()
                .map(|telemetry| SinkRecord::Publish { telemetry }),
        );
    }

    fn retract(&self, flight_id: &FlightId) {
        self.write_records([SinkRecord::Retract { flight_id }]);
    }

    fn clear(&self) {
        self.write_records([SinkRecord::Clear]);
    }
}
