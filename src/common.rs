use std::fmt;
use std::str;

use crate::error::TelemetryError;

/// The kinds of sensors the processor knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SensorType {
    Altitude,
    Velocity,
}

impl SensorType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            SensorType::Altitude => "Altitude",
            SensorType::Velocity => "Velocity",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for SensorType {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Altitude" => Ok(SensorType::Altitude),
            "Velocity" => Ok(SensorType::Velocity),
            other => Err(TelemetryError::InvalidArgument(other.to_string())),
        }
    }
}

/// Defines a basic sensor.
///
/// A sensor owns its random number generator, so reading it needs `&mut self`
/// and a single sensor must not be shared between threads without a lock.
pub(crate) trait Sensor {
    fn get_name(&self) -> &str;
    fn get_type(&self) -> SensorType;
    fn read_data(&mut self) -> f64;

    /// Every reading is accepted for now; sensors may narrow this down.
    fn is_valid(&self, _value: f64) -> bool {
        true
    }
}
