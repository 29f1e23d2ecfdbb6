use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::common;

/// Typical cruising altitude in feet.
const MEAN_FT: f64 = 20000.0;
/// Sensor noise in feet.
const STD_DEV_FT: f64 = 300.0;

/// Simulated altimeter; readings are normally distributed around cruising altitude.
pub struct AltitudeSensor {
    name: String,
    rng: StdRng,
}

impl AltitudeSensor {
    pub fn new(name: String) -> AltitudeSensor {
        AltitudeSensor {
            name,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same as `new`, but the readings are reproducible.
    pub fn with_seed(name: String, seed: u64) -> AltitudeSensor {
        AltitudeSensor {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl common::Sensor for AltitudeSensor {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_type(&self) -> common::SensorType {
        common::SensorType::Altitude
    }

    fn read_data(&mut self) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        MEAN_FT + STD_DEV_FT * z
    }
}
