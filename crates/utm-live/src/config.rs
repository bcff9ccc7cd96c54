//! Loading the simulation configuration from RON files.

use std::fs;
use std::path::Path;

use tracing::info;

use utm_sim::SimConfig;

use crate::errors::LiveResult;

/// Parse and validate a RON config string. Missing fields take defaults.
pub fn parse_config(input: &str) -> LiveResult<SimConfig> {
    let config: SimConfig = ron::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a RON config file.
pub fn load_config(path: impl AsRef<Path>) -> LiveResult<SimConfig> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let config = parse_config(&input)?;
    info!(path = %path.display(), "loaded simulation config");
    Ok(config)
}
