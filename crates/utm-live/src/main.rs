//! Demo runner: simulates a handful of drone flights and prints telemetry as
//! JSON lines on stdout. Logs go to stderr.
//!
//! Usage: `utm-live [config.ron] [seconds]`

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use utm_core::commands::{FlightCommand, FlightRegistration};
use utm_core::types::{FlightId, GeoPoint};
use utm_live::config::load_config;
use utm_live::logging::init_tracing;
use utm_live::sink::JsonLineSink;
use utm_live::FlightSimService;
use utm_sim::SimConfig;

const DEFAULT_RUN_SECS: u64 = 10;

fn demo_flights() -> Vec<FlightRegistration> {
    vec![
        FlightRegistration::new(
            "FL-1001",
            "DR-01",
            "UTM-1001",
            GeoPoint::new(37.7749, -122.4194),
            GeoPoint::new(37.8044, -122.2712),
        ),
        FlightRegistration::new(
            "FL-1002",
            "DR-02",
            "UTM-1002",
            GeoPoint::new(37.3382, -121.8863),
            GeoPoint::new(37.4419, -122.1430),
        ),
        FlightRegistration::new(
            "FL-1003",
            "DR-03",
            "UTM-1003",
            GeoPoint::new(37.5485, -121.9886),
            GeoPoint::new(37.6688, -122.0808),
        ),
    ]
}

fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("cannot load config {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let run_secs = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RUN_SECS);

    let tick_interval = config.tick_interval();
    let sink = Arc::new(JsonLineSink::new(std::io::stdout()));
    let service = FlightSimService::new(config, sink);
    let report = service.reconcile(&demo_flights());
    info!(flights = report.added.len(), "demo flights registered");

    if let Err(e) = service.start() {
        error!("cannot start simulation: {e}");
        return ExitCode::FAILURE;
    }

    // Exercise the command path halfway through the run.
    let half = Duration::from_secs(run_secs) / 2;
    std::thread::sleep(half);
    service.execute_command(&FlightId::from("FL-1002"), FlightCommand::Hover);
    service.execute_command(&FlightId::from("FL-1003"), FlightCommand::Rtl);
    std::thread::sleep(Duration::from_secs(run_secs) - half);

    service.stop();
    info!(
        ticks = service.tick_count(),
        interval_ms = tick_interval.as_millis() as u64,
        "demo finished"
    );
    service.shutdown();
    ExitCode::SUCCESS
}
