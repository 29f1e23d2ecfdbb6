#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use std::env;
use std::process;

use log::{info, warn};

mod altitude;
mod common;
mod config;
mod error;
mod logger;
mod processor;
mod velocity;

use error::TelemetryError;

/// Instantiates the right sensor type based on its name.
fn create_sensor(type_name: &str, name: &str) -> Result<Box<dyn common::Sensor>, TelemetryError> {
    build_sensor(type_name, name, None)
}

/// Same as `create_sensor`, with reproducible readings.
fn create_seeded_sensor(
    type_name: &str,
    name: &str,
    seed: u64,
) -> Result<Box<dyn common::Sensor>, TelemetryError> {
    build_sensor(type_name, name, Some(seed))
}

/// Seeds from the OS entropy source unless a fixed seed is given.
fn build_sensor(
    type_name: &str,
    name: &str,
    seed: Option<u64>,
) -> Result<Box<dyn common::Sensor>, TelemetryError> {
    let name: String = name.to_string();
    let sensor: Box<dyn common::Sensor> = match (type_name.parse::<common::SensorType>()?, seed) {
        (common::SensorType::Altitude, None) => Box::new(altitude::AltitudeSensor::new(name)),
        (common::SensorType::Altitude, Some(seed)) => {
            Box::new(altitude::AltitudeSensor::with_seed(name, seed))
        }
        (common::SensorType::Velocity, None) => Box::new(velocity::VelocitySensor::new(name)),
        (common::SensorType::Velocity, Some(seed)) => {
            Box::new(velocity::VelocitySensor::with_seed(name, seed))
        }
    };
    Ok(sensor)
}

/// Given the configuration build the sensors, in the listed order.
fn get_sensors(cfg: &config::Config) -> Result<Vec<Box<dyn common::Sensor>>, TelemetryError> {
    let mut sensors: Vec<Box<dyn common::Sensor>> = Vec::new();
    for name in &cfg.general.sensors {
        let sensor_cfg = cfg
            .sensors
            .get(name)
            .ok_or_else(|| TelemetryError::MissingSensorConfig(name.to_string()))?;
        let sensor = build_sensor(&sensor_cfg.sensor_type, name, sensor_cfg.seed)?;
        info!("created {} sensor {}.", sensor.get_type(), name);
        sensors.push(sensor);
    }
    if sensors.is_empty() {
        warn!("no sensors configured; cycles will be empty.");
    }
    Ok(sensors)
}

fn run() -> Result<(), TelemetryError> {
    // Load the configuration.
    let cfg_file: String =
        env::var("TELEMETRY_CONFIG").unwrap_or_else(|_| String::from("defaults.toml"));
    let cfg = config::load_config(&cfg_file)?;

    let mut processor = processor::TelemetryProcessor::new();
    for sensor in get_sensors(&cfg)? {
        processor.add_sensor(sensor);
    }
    processor.run_simulation(cfg.general.cycles, cfg.general.delay_ms);
    Ok(())
}

fn main() -> process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== Simple Telemetry Processor ===\n");
    match run() {
        Ok(()) => {
            println!("\nSimulation finished.");
            process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    const TEST_DATA: &str = "[general]\nsensors=[\"foo\",\"bar\"]\n\n[foo]\ntype=\"Velocity\"\nseed=1\n\n[bar]\ntype=\"Altitude\"\n";
    const FAULTY_DATA: &str = "[general]\nsensors=[\"foo\",\"bar\"]\n\n[foo]\ntype=\"Velocity\"\n";
    const FAULTY_SENSOR: &str = "[general]\nsensors=[\"foo\"]\n\n[foo]\ntype=\"Pressure\"\n";

    fn setup(filename: &str, data: &str) {
        let mut file =
            fs::File::create(filename).expect("failed to create config file for testing.");
        file.write_all(data.as_bytes())
            .expect("failed to write sample config file.");
    }

    fn tear_down(filename: &str) {
        fs::remove_file(filename).expect("failed to delete config file for testing.");
    }

    // Tests for success.

    #[test]
    fn test_get_sensors_for_success() {
        setup("for_testing0.toml", TEST_DATA);
        let cfg = config::load_config("for_testing0.toml");
        tear_down("for_testing0.toml");
        get_sensors(&cfg.unwrap()).unwrap();
    }

    #[test]
    fn test_create_sensor_for_success() {
        create_sensor("Altitude", "foo").unwrap();
        create_sensor("Velocity", "foo").unwrap();
        create_seeded_sensor("Altitude", "foo", 42).unwrap();
        create_seeded_sensor("Velocity", "foo", 42).unwrap();
    }

    // Tests for failure.

    #[test]
    fn test_get_sensors_for_failure() {
        setup("for_testing1.toml", FAULTY_DATA);
        let cfg = config::load_config("for_testing1.toml");
        tear_down("for_testing1.toml");
        match get_sensors(&cfg.unwrap()) {
            Err(TelemetryError::MissingSensorConfig(name)) => assert_eq!(name, "bar"),
            _ => panic!("expected a missing sensor config."),
        }
    }

    #[test]
    fn test_get_sensors_unknown_type_for_failure() {
        setup("for_testing2.toml", FAULTY_SENSOR);
        let cfg = config::load_config("for_testing2.toml");
        tear_down("for_testing2.toml");
        assert!(matches!(
            get_sensors(&cfg.unwrap()),
            Err(TelemetryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_create_sensor_for_failure() {
        for type_name in ["Pressure", "altitude", ""] {
            match create_sensor(type_name, "foo") {
                Err(e) => {
                    assert!(matches!(&e, TelemetryError::InvalidArgument(t) if t == type_name));
                    assert_eq!(e.to_string(), format!("unknown sensor type: {}", type_name));
                }
                Ok(_) => panic!("no sensor expected for {:?}.", type_name),
            }
        }
        assert!(create_seeded_sensor("Temperature", "foo", 1).is_err());
    }

    // Tests for sanity.

    #[test]
    fn test_create_sensor_for_sanity() {
        for (type_name, sensor_type) in [
            ("Altitude", common::SensorType::Altitude),
            ("Velocity", common::SensorType::Velocity),
        ] {
            let sensor = create_sensor(type_name, "Sensor-7").unwrap();
            assert_eq!(sensor.get_type(), sensor_type);
            assert_eq!(sensor.get_name(), "Sensor-7");
        }
    }

    #[test]
    fn test_create_seeded_sensor_for_sanity() {
        for (type_name, sensor_type) in [
            ("Altitude", common::SensorType::Altitude),
            ("Velocity", common::SensorType::Velocity),
        ] {
            let mut a = create_seeded_sensor(type_name, "Sensor-7", 9).unwrap();
            let mut b = create_seeded_sensor(type_name, "Sensor-8", 9).unwrap();
            assert_eq!(a.get_type(), sensor_type);
            assert_eq!(a.get_name(), "Sensor-7");
            let tmp_a: Vec<f64> = (0..5).map(|_| a.read_data()).collect();
            let tmp_b: Vec<f64> = (0..5).map(|_| b.read_data()).collect();
            assert_eq!(tmp_a, tmp_b);
        }
    }

    #[test]
    fn test_get_sensors_for_sanity() {
        setup("for_testing3.toml", TEST_DATA);
        let cfg = config::load_config("for_testing3.toml");
        tear_down("for_testing3.toml");
        let cfg = cfg.unwrap();
        let res = get_sensors(&cfg).unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].get_name(), "foo");
        assert_eq!(res[0].get_type(), common::SensorType::Velocity);
        assert_eq!(res[1].get_name(), "bar");
        assert_eq!(res[1].get_type(), common::SensorType::Altitude);

        // seeded sensors are reproducible.
        let mut a = create_seeded_sensor("Velocity", "foo", 1).unwrap();
        let mut b = get_sensors(&cfg).unwrap();
        assert_eq!(a.read_data(), b[0].read_data());
    }
}
