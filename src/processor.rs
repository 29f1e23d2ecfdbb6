use std::io;
use std::thread;
use std::time;

use std::io::Write;

use crate::common;
use crate::logger::Logger;

/// Altitudes below this many feet raise a warning.
pub(crate) const LOW_ALTITUDE_LIMIT: f64 = 5000.0;
/// Velocities above this many knots raise an alert.
pub(crate) const HIGH_VELOCITY_LIMIT: f64 = 550.0;

/// Safety bounds a reading can cross.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Alert {
    LowAltitude,
    HighVelocity,
}

impl Alert {
    /// Determine which alert, if any, a reading raises.
    pub(crate) fn check(value: f64, sensor_type: common::SensorType) -> Option<Alert> {
        match sensor_type {
            common::SensorType::Altitude if value < LOW_ALTITUDE_LIMIT => {
                Some(Alert::LowAltitude)
            }
            common::SensorType::Velocity if value > HIGH_VELOCITY_LIMIT => {
                Some(Alert::HighVelocity)
            }
            _ => None,
        }
    }

    fn log_message(&self, name: &str, value: f64) -> String {
        match self {
            Alert::LowAltitude => {
                format!("WARNING: Low Altitude Detected! {} = {:.6}", name, value)
            }
            Alert::HighVelocity => format!("ALERT: High Velocity! {} = {:.6}", name, value),
        }
    }

    fn banner(&self) -> &'static str {
        match self {
            Alert::LowAltitude => ">>> WARNING: LOW ALT <<<",
            Alert::HighVelocity => ">>> ALERT: HIGH VEL <<<",
        }
    }
}

/// Reads all registered sensors in cycles, checks thresholds and logs everything.
///
/// Sensors are processed in the order they were added. The pause between two
/// cycles is a blocking sleep on the running thread unless another delay is
/// handed to [`TelemetryProcessor::with_output`].
pub(crate) struct TelemetryProcessor {
    sensors: Vec<Box<dyn common::Sensor>>,
    logger: Logger,
    console: Box<dyn Write>,
    delay: Box<dyn FnMut(time::Duration)>,
}

impl TelemetryProcessor {
    pub(crate) fn new() -> TelemetryProcessor {
        TelemetryProcessor::with_output(Logger::new(), Box::new(io::stdout()), thread::sleep)
    }

    /// `delay` is called with the pause after every cycle.
    pub(crate) fn with_output<F>(
        logger: Logger,
        console: Box<dyn Write>,
        delay: F,
    ) -> TelemetryProcessor
    where
        F: FnMut(time::Duration) + 'static,
    {
        logger.log("Telemetry Processor initialized");
        TelemetryProcessor {
            sensors: Vec::new(),
            logger,
            console,
            delay: Box::new(delay),
        }
    }

    /// Takes ownership of the sensor; it is read after all previously added ones.
    pub(crate) fn add_sensor(&mut self, sensor: Box<dyn common::Sensor>) {
        self.logger.log(&format!(
            "Added sensor: {} ({})",
            sensor.get_name(),
            sensor.get_type()
        ));
        self.sensors.push(sensor);
    }

    /// Runs `cycles` read cycles, pausing `delay_ms` after each one.
    ///
    /// Non-positive cycle counts run nothing; negative delays count as zero.
    /// Returns the number of cycles performed.
    pub(crate) fn run_simulation(&mut self, cycles: i64, delay_ms: i64) -> u64 {
        self.logger
            .log(&format!("Starting simulation - {} cycles", cycles));
        let pause = time::Duration::from_millis(delay_ms.max(0) as u64);

        let mut done: u64 = 0;
        for i in 0..cycles.max(0) {
            self.emit(&format!("\n--- Cycle {} ---", i + 1));
            self.process_all_sensors();
            (self.delay)(pause);
            done += 1;
        }

        self.logger.log("Simulation completed");
        done
    }

    /// One cycle: read, show, check and log every sensor once.
    fn process_all_sensors(&mut self) {
        for idx in 0..self.sensors.len() {
            let sensor = &mut self.sensors[idx];
            let value: f64 = sensor.read_data();
            let name: String = sensor.get_name().to_string();
            let sensor_type = sensor.get_type();
            let status = if sensor.is_valid(value) {
                "OK"
            } else {
                "INVALID"
            };

            self.emit(&format!(
                "{} ({}): {:.1} [{}]",
                name, sensor_type, value, status
            ));
            self.check_thresholds(value, &name, sensor_type);
            self.logger.log(&format!("{}: {:.6}", name, value));
        }
    }

    /// Logs and shows an alert if the reading crosses its safety bound.
    pub(crate) fn check_thresholds(
        &mut self,
        value: f64,
        name: &str,
        sensor_type: common::SensorType,
    ) -> Option<Alert> {
        let alert = Alert::check(value, sensor_type)?;
        self.logger.log(&alert.log_message(name, value));
        self.emit(alert.banner());
        Some(alert)
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.console, "{}", line) {
            eprintln!("Couldn't write to console: {}", e);
        }
    }
}
