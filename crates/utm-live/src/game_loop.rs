//! Tick loop thread. Advances the shared engine at a fixed interval.
//!
//! The first tick runs as soon as the thread starts, then once per interval.
//! Waiting is done on the command channel, so `Shutdown` cancels the pending
//! wait immediately; a tick already in progress always completes.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use utm_sim::SimulationEngine;

use crate::errors::{loop_spawn_error, LiveResult};
use crate::state::LoopCommand;

/// Owned handle to a running tick loop.
pub struct LoopHandle {
    cmd_tx: mpsc::Sender<LoopCommand>,
    join: JoinHandle<()>,
}

impl LoopHandle {
    /// Ask the loop for an immediate extra tick.
    pub fn tick_now(&self) {
        let _ = self.cmd_tx.send(LoopCommand::TickNow);
    }

    /// True once the loop thread has exited on its own.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) {
        let _ = self.cmd_tx.send(LoopCommand::Shutdown);
        if self.join.join().is_err() {
            warn!("tick loop thread panicked");
        }
    }
}

/// Spawns the tick loop in a new thread.
pub fn spawn_tick_loop(
    engine: Arc<Mutex<SimulationEngine>>,
    interval: Duration,
) -> LiveResult<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let join = std::thread::Builder::new()
        .name("utm-tick-loop".into())
        .spawn(move || run_tick_loop(&engine, &cmd_rx, interval))
        .map_err(loop_spawn_error)?;

    Ok(LoopHandle { cmd_tx, join })
}

/// The tick loop. Runs until Shutdown or channel disconnect.
fn run_tick_loop(
    engine: &Mutex<SimulationEngine>,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    interval: Duration,
) {
    info!(interval_ms = interval.as_millis() as u64, "tick loop started");
    // None once the schedule runs past what `Instant` can represent; from
    // then on only `TickNow` ticks.
    let mut next_tick_time = Some(Instant::now());

    loop {
        tick_once(engine);

        next_tick_time = next_tick_time.and_then(|t| t.checked_add(interval));
        let now = Instant::now();
        let too_late = next_tick_time
            .and_then(|t| t.checked_add(interval.saturating_mul(2)))
            .is_some_and(|late| now > late);
        if too_late {
            // Too far behind, reset to avoid a catch-up burst
            next_tick_time = Some(now);
        }

        // Wait for the next tick, serving commands as they arrive
        loop {
            let received = match next_tick_time {
                Some(next) => cmd_rx.recv_timeout(next.saturating_duration_since(Instant::now())),
                None => cmd_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(LoopCommand::TickNow) => tick_once(engine),
                Ok(LoopCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                    info!("tick loop stopped");
                    return;
                }
                Err(RecvTimeoutError::Timeout) => break,
            }
        }
    }
}

/// Advance and publish all flights as one unit.
pub(crate) fn tick_once(engine: &Mutex<SimulationEngine>) {
    let mut engine = engine.lock().unwrap_or_else(PoisonError::into_inner);
    engine.tick();
    for transition in engine.take_transitions() {
        info!(
            flight_id = %transition.flight_id,
            from = %transition.from,
            to = %transition.to,
            tick = transition.tick,
            "flight mode changed"
        );
    }
}
