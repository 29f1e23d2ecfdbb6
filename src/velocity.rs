use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common;

/// Lowest airspeed reported, in knots.
const MIN_KTS: f64 = 200.0;
/// Highest airspeed reported, in knots.
const MAX_KTS: f64 = 600.0;

/// Simulated pitot tube; every airspeed between the bounds is equally likely.
pub struct VelocitySensor {
    name: String,
    rng: StdRng,
}

impl VelocitySensor {
    pub fn new(name: String) -> VelocitySensor {
        VelocitySensor {
            name,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(name: String, seed: u64) -> VelocitySensor {
        VelocitySensor {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl common::Sensor for VelocitySensor {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_type(&self) -> common::SensorType {
        common::SensorType::Velocity
    }

    fn read_data(&mut self) -> f64 {
        self.rng.random_range(MIN_KTS..=MAX_KTS)
    }
}
