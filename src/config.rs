use std::collections;
use std::fs;

use log::debug;
use serde::Deserialize;

use crate::error::TelemetryError;

/// The `[general]` section.
#[derive(Debug, Deserialize)]
pub(crate) struct General {
    #[serde(default = "default_cycles")]
    pub(crate) cycles: i64,
    #[serde(default = "default_delay_ms")]
    pub(crate) delay_ms: i64,
    /// Names of the sensor sections to register, in processing order.
    #[serde(default)]
    pub(crate) sensors: Vec<String>,
}

/// A per-sensor section.
#[derive(Debug, Deserialize)]
pub(crate) struct SensorConfig {
    #[serde(rename = "type")]
    pub(crate) sensor_type: String,
    pub(crate) seed: Option<u64>,
}

/// Struct holding the config info.
#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    pub(crate) general: General,
    #[serde(flatten)]
    pub(crate) sensors: collections::HashMap<String, SensorConfig>,
}

fn default_cycles() -> i64 {
    20
}

fn default_delay_ms() -> i64 {
    300
}

/// Load the configuration.
pub(crate) fn load_config(filename: &str) -> Result<Config, TelemetryError> {
    let contents: String = read_config(filename)?;
    let cfg: Config = get_config(&contents)?;
    debug!(
        "loaded {} with {} sensor section(s).",
        filename,
        cfg.sensors.len()
    );
    Ok(cfg)
}

/// Reads a string from a given filename.
fn read_config(filename: &str) -> Result<String, TelemetryError> {
    fs::read_to_string(filename).map_err(|source| TelemetryError::ConfigRead {
        path: filename.to_string(),
        source,
    })
}

/// Parses the configuration from a string.
fn get_config(contents: &str) -> Result<Config, TelemetryError> {
    Ok(toml::from_str(contents)?)
}
