use std::io;

use thiserror::Error;

/// Everything that can go wrong while setting up a simulation.
#[derive(Debug, Error)]
pub(crate) enum TelemetryError {
    /// The sensor factory was asked for a type it does not know.
    #[error("unknown sensor type: {0}")]
    InvalidArgument(String),

    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not parse the config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("no config provided for sensor: {0}")]
    MissingSensorConfig(String),
}
