//! Core types and definitions for the UTM flight-motion simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, telemetry snapshots, events, and constants.
//! It has no dependency on the ECS, the tick loop, or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
