//! Simulation constants and default tuning parameters.

// --- Tick loop ---

/// Default interval between ticks (milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Longest accepted interval between ticks (one hour).
pub const MAX_TICK_INTERVAL_MS: u64 = 3_600_000;

/// Default RNG seed for battery seeding.
pub const DEFAULT_SEED: u64 = 42;

// --- Route traversal ---

/// Progress added per tick in auto mode (one-way traversal in ~125 ticks).
pub const PROGRESS_INCREMENT: f64 = 0.008;

/// Progress multiplier while returning to launch.
pub const RTL_PROGRESS_FACTOR: f64 = 1.5;

// --- Altitude ---

/// Cruise altitude (meters above ground).
pub const CRUISE_ALTITUDE: f64 = 120.0;

/// Fraction of the route spent climbing (and, mirrored, descending).
pub const ALTITUDE_RAMP_FRACTION: f64 = 0.2;

/// Maximum altitude change per tick.
pub const ALTITUDE_RATE: f64 = 5.0;

/// Maximum altitude change per tick during an emergency descent.
pub const EMERGENCY_ALTITUDE_RATE: f64 = 15.0;

// --- Speed ---

/// Base cruise ground speed (km/h).
pub const BASE_SPEED: f64 = 45.0;

/// Fraction of the route at each end flown at reduced speed.
pub const CLIMB_PHASE_FRACTION: f64 = 0.15;

/// Speed multiplier during climb and descent.
pub const CLIMB_SPEED_FACTOR: f64 = 0.6;

/// Relative amplitude of the cruise speed variation.
pub const CRUISE_SPEED_VARIATION: f64 = 0.05;

/// Number of full speed-variation cycles over one traversal.
pub const CRUISE_SPEED_CYCLES: f64 = 3.0;

/// Speed multiplier while returning to launch.
pub const RTL_SPEED_FACTOR: f64 = 1.2;

// --- Battery ---

/// Battery never drops below this level.
pub const BATTERY_FLOOR: f64 = 5.0;

/// Range for the randomly seeded initial battery level.
pub const BATTERY_SEED_MIN: f64 = 95.0;
pub const BATTERY_SEED_MAX: f64 = 100.0;

/// Drain per tick during cruise.
pub const DRAIN_CRUISE: f64 = 0.02;

/// Drain per tick during climb, descent, and landing.
pub const DRAIN_CLIMB_DESCENT: f64 = 0.04;

/// Drain per tick while holding position.
pub const DRAIN_HOLD: f64 = 0.015;

/// Drain per tick during an emergency descent.
pub const DRAIN_EMERGENCY: f64 = 0.1;
