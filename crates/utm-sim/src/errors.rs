//! Errors for engine configuration.
//!
//! Simulation operations themselves never fail; anomalies such as unknown
//! flight ids are absorbed as no-ops.

use thiserror::Error;

pub type SimResult<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub fn invalid_config(msg: impl ToString) -> SimError {
    SimError::InvalidConfig(msg.to_string())
}
