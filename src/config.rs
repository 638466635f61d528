use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::SimulationError;

/// Airframe, engine and aerodynamic parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub baseline_mass: f64,
    pub wing_area: f64,
    pub total_thrust: f64,
    pub throttle_setting: f64,
    pub fuel_burn_rate: f64,
    pub drag_coeff_zero: f64,
    pub induced_drag_coeff: f64,
    pub max_lift_coeff: f64,
    pub lift_slope: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        AircraftConfig {
            baseline_mass: MASS_BASELINE,
            wing_area: WING_AREA,
            total_thrust: THRUST_TOTAL,
            throttle_setting: THROTTLE_SETTING,
            fuel_burn_rate: FUEL_BURN_RATE,
            drag_coeff_zero: DRAG_COEFF_ZERO,
            induced_drag_coeff: INDUCED_DRAG_COEFF,
            max_lift_coeff: MAX_LIFT_COEFF,
            lift_slope: LIFT_SLOPE,
        }
    }
}

/// Start and goal of the climb. Speeds are given in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub start_altitude: f64,
    pub target_altitude: f64,
    pub start_speed_kmh: f64,
    pub target_speed_kmh: f64,
    pub envelope_max_altitude: f64,
    pub envelope_max_speed: f64,
}

impl MissionConfig {
    pub fn start_speed_ms(&self) -> f64 {
        self.start_speed_kmh / KMH_PER_MS
    }

    pub fn target_speed_ms(&self) -> f64 {
        self.target_speed_kmh / KMH_PER_MS
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        MissionConfig {
            start_altitude: ALT_START,
            target_altitude: ALT_TARGET,
            start_speed_kmh: VEL_INITIAL_KMH,
            target_speed_kmh: VEL_TARGET_KMH,
            envelope_max_altitude: ENVELOPE_MAX_ALTITUDE,
            envelope_max_speed: ENVELOPE_MAX_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub gravity: f64,
    pub time_step: f64,
    pub max_time: f64,
    /// Steps between progress log lines; 0 disables them.
    pub progress_interval: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            gravity: GRAVITY,
            time_step: TIME_STEP,
            max_time: MAX_SIMULATION_TIME,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

/// Everything a run needs, fixed at construction time.
///
/// Every group is `#[serde(default)]`, so a JSON file only has to name the
/// values it overrides:
///
/// ```json
/// { "aircraft": { "total_thrust": 200000.0 }, "run": { "max_time": 300.0 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub aircraft: AircraftConfig,
    pub mission: MissionConfig,
    pub run: RunConfig,
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let aircraft = &self.aircraft;
        let mission = &self.mission;
        let run = &self.run;

        require_positive("aircraft.baseline_mass", aircraft.baseline_mass)?;
        require_positive("aircraft.wing_area", aircraft.wing_area)?;
        require_non_negative("aircraft.total_thrust", aircraft.total_thrust)?;
        require_non_negative("aircraft.fuel_burn_rate", aircraft.fuel_burn_rate)?;
        require_finite("aircraft.drag_coeff_zero", aircraft.drag_coeff_zero)?;
        require_finite("aircraft.induced_drag_coeff", aircraft.induced_drag_coeff)?;
        require_finite("aircraft.max_lift_coeff", aircraft.max_lift_coeff)?;
        require_finite("aircraft.lift_slope", aircraft.lift_slope)?;
        if !(0.0..=1.0).contains(&aircraft.throttle_setting) {
            return Err(SimulationError::InitializationError(format!(
                "aircraft.throttle_setting must be within [0, 1], got {}",
                aircraft.throttle_setting
            )));
        }

        require_non_negative("mission.start_altitude", mission.start_altitude)?;
        require_positive("mission.target_altitude", mission.target_altitude)?;
        require_positive("mission.start_speed_kmh", mission.start_speed_kmh)?;
        require_positive("mission.target_speed_kmh", mission.target_speed_kmh)?;
        require_positive("mission.envelope_max_altitude", mission.envelope_max_altitude)?;
        require_positive("mission.envelope_max_speed", mission.envelope_max_speed)?;

        require_positive("run.gravity", run.gravity)?;
        require_positive("run.time_step", run.time_step)?;
        require_positive("run.max_time", run.max_time)?;

        // Bounds the loop and makes sure each step still advances the clock.
        let step_count = (run.max_time / run.time_step).ceil();
        if !step_count.is_finite() || step_count > MAX_SIMULATION_STEPS as f64 {
            return Err(SimulationError::InitializationError(format!(
                "run.max_time / run.time_step needs {} steps, limit is {}",
                step_count, MAX_SIMULATION_STEPS
            )));
        }

        Ok(())
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InitializationError(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), SimulationError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InitializationError(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InitializationError(format!(
            "{name} must not be negative, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.aircraft.baseline_mass, 43_000.0);
        assert_eq!(config.aircraft.total_thrust, 13_600.0);
        assert_eq!(config.run.time_step, 1.0);
    }

    #[test]
    fn test_speed_conversion() {
        let mission = MissionConfig::default();
        assert_relative_eq!(mission.start_speed_ms(), 86.111_111_111, epsilon = 1e-6);
        assert_relative_eq!(mission.target_speed_ms(), 194.444_444_444, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "aircraft": { "total_thrust": 200000.0 }, "run": { "max_time": 300.0 } }"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.aircraft.total_thrust, 200_000.0);
        assert_eq!(config.aircraft.wing_area, WING_AREA);
        assert_eq!(config.run.max_time, 300.0);
        assert_eq!(config.run.time_step, TIME_STEP);
        assert_eq!(config.mission, MissionConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SimulationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = SimulationConfig::from_json_str("{ \"aircraft\": ");
        assert!(matches!(result, Err(SimulationError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let mut config = SimulationConfig::default();
        config.aircraft.baseline_mass = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SimulationError::InitializationError(_)));
        assert!(err.to_string().contains("baseline_mass"));
    }

    #[test]
    fn test_rejects_throttle_out_of_range() {
        let mut config = SimulationConfig::default();
        config.aircraft.throttle_setting = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_time_step() {
        let mut config = SimulationConfig::default();
        config.run.time_step = f64::NAN;
        assert!(config.validate().is_err());

        config.run.time_step = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unbounded_step_count() {
        let mut config = SimulationConfig::default();
        config.run.max_time = 1.0e18;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SimulationError::InitializationError(_)));
        assert!(err.to_string().contains("steps"));

        let mut config = SimulationConfig::default();
        config.run.time_step = 1.0e-300;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.run.max_time = f64::MAX;
        config.run.time_step = f64::MIN_POSITIVE;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_step_count_at_limit() {
        let mut config = SimulationConfig::default();
        config.run.max_time = MAX_SIMULATION_STEPS as f64;
        config.run.time_step = 1.0;
        assert!(config.validate().is_ok());

        config.run.max_time += 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimulationConfig::from_json_file("/nonexistent/climb_config.json");
        assert!(matches!(result, Err(SimulationError::IoError(_))));
    }
}
