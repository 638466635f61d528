use tracing::{debug, info, warn};

use crate::config::{MissionConfig, SimulationConfig};
use crate::control::aircraft::AircraftDynamics;
use crate::control::environment::AtmosphereModel;
use crate::control::guidance::GuidanceSystem;
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::Telemetry;
use crate::trajectory_system::flight_path::FlightPath;
use crate::trajectory_system::kinematics::FlightState;

/// How a run ended. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    TargetReached,
    TimeExceeded,
    EnvelopeViolation,
}

impl RunOutcome {
    /// Derives the outcome from a run's final state, using the same priority
    /// as the control loop.
    pub fn classify(state: &FlightState, mission: &MissionConfig) -> Self {
        if state.altitude >= mission.target_altitude {
            RunOutcome::TargetReached
        } else if outside_envelope(state, mission) {
            RunOutcome::EnvelopeViolation
        } else {
            RunOutcome::TimeExceeded
        }
    }
}

fn outside_envelope(state: &FlightState, mission: &MissionConfig) -> bool {
    state.altitude > mission.envelope_max_altitude || state.speed > mission.envelope_max_speed
}

#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub path: FlightPath,
    pub outcome: RunOutcome,
    pub steps: usize,
}

/// Drives an aircraft from the launch state until it reaches the target
/// altitude, leaves the flight envelope, or runs out of simulated time.
#[derive(Debug, Clone)]
pub struct TrajectoryController {
    config: SimulationConfig,
    atmosphere: AtmosphereModel,
    guidance: GuidanceSystem,
}

impl TrajectoryController {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_atmosphere(config, AtmosphereModel::standard())
    }

    pub fn with_atmosphere(
        config: SimulationConfig,
        atmosphere: AtmosphereModel,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let guidance = GuidanceSystem::from_mission(&config.mission);

        Ok(TrajectoryController {
            config,
            atmosphere,
            guidance,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn guidance(&self) -> &GuidanceSystem {
        &self.guidance
    }

    /// A fresh aircraft at its rated mass and thrust.
    pub fn new_aircraft(&self) -> AircraftDynamics {
        AircraftDynamics::new(&self.config, self.atmosphere.clone())
    }

    /// Runs a complete simulation on a fresh aircraft.
    pub fn simulate(&self) -> SimulationRun {
        let mut aircraft = self.new_aircraft();
        self.run(&mut aircraft)
    }

    /// Runs on a fresh aircraft and returns only the path; the caller reads
    /// the outcome off the final state.
    pub fn compute_path(&self) -> FlightPath {
        self.simulate().path
    }

    pub fn run(&self, aircraft: &mut AircraftDynamics) -> SimulationRun {
        let mission = &self.config.mission;
        let run = &self.config.run;

        info!(
            target_altitude = mission.target_altitude,
            target_speed_kmh = mission.target_speed_kmh,
            max_time = run.max_time,
            "starting climb simulation"
        );

        let mut path = FlightPath::new();

        let mut current = FlightState::initial(&self.config, &self.atmosphere);
        path.append(current);

        let mut outcome = RunOutcome::TimeExceeded;
        let mut steps: usize = 0;

        while current.time < run.max_time {
            steps += 1;

            let aoa_command = self.guidance.angle_of_attack_command(&current);
            debug!(step = steps, aoa_command, "commanded angle of attack");

            current = aircraft.propagate(&current, run.time_step, aoa_command);
            path.append(current);

            if run.progress_interval > 0 && steps % run.progress_interval == 0 {
                Telemetry::log_progress(steps, &current);
            }

            if current.altitude >= mission.target_altitude {
                outcome = RunOutcome::TargetReached;
                info!(
                    time = current.time,
                    altitude = current.altitude,
                    "target altitude reached"
                );
                break;
            }

            if outside_envelope(&current, mission) {
                outcome = RunOutcome::EnvelopeViolation;
                warn!(
                    time = current.time,
                    altitude = current.altitude,
                    speed = current.speed,
                    "flight envelope exceeded, stopping simulation"
                );
                break;
            }
        }

        SimulationRun {
            path,
            outcome,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_thrust(total_thrust: f64) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.aircraft.total_thrust = total_thrust;
        config
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = SimulationConfig::default();
        config.run.max_time = 0.0;

        assert!(TrajectoryController::new(config).is_err());
    }

    #[test]
    fn test_default_run_times_out() {
        let controller = TrajectoryController::new(SimulationConfig::default()).unwrap();
        let result = controller.simulate();

        assert_eq!(result.outcome, RunOutcome::TimeExceeded);
        assert_eq!(result.steps, 600);
        assert_eq!(result.path.len(), 601);
        assert_eq!(result.path.total_duration(), 600.0);
        assert!(result.path.last().unwrap().altitude < 6_000.0);
    }

    #[test]
    fn test_path_starts_with_initial_state() {
        let controller = TrajectoryController::new(SimulationConfig::default()).unwrap();
        let path = controller.compute_path();
        let first = path.all_points()[0];

        assert_eq!(first, FlightState::initial(controller.config(), &AtmosphereModel::standard()));
    }

    #[test]
    fn test_high_thrust_reaches_target() {
        let controller = TrajectoryController::new(config_with_thrust(200_000.0)).unwrap();
        let result = controller.simulate();

        assert_eq!(result.outcome, RunOutcome::TargetReached);
        let last = result.path.last().unwrap();
        assert!(last.altitude >= 6_000.0);
        assert!(last.time < 600.0);
        assert_eq!(
            RunOutcome::classify(last, &controller.config().mission),
            RunOutcome::TargetReached
        );
    }

    #[test]
    fn test_excessive_thrust_violates_envelope() {
        let controller = TrajectoryController::new(config_with_thrust(3_000_000.0)).unwrap();
        let result = controller.simulate();

        assert_eq!(result.outcome, RunOutcome::EnvelopeViolation);
        let last = result.path.last().unwrap();
        assert!(last.speed > 1_000.0);
        assert!(last.altitude < 6_000.0);
    }

    #[test]
    fn test_target_takes_priority_over_envelope() {
        let mission = MissionConfig::default();
        let state = FlightState {
            altitude: 25_000.0,
            speed: 1_500.0,
            ..FlightState::default()
        };

        assert_eq!(RunOutcome::classify(&state, &mission), RunOutcome::TargetReached);
    }

    #[test]
    fn test_classify_time_exceeded() {
        let mission = MissionConfig::default();
        let state = FlightState {
            altitude: 1_000.0,
            speed: 150.0,
            ..FlightState::default()
        };

        assert_eq!(RunOutcome::classify(&state, &mission), RunOutcome::TimeExceeded);
    }

    #[test]
    fn test_run_on_supplied_aircraft_updates_it() {
        let controller = TrajectoryController::new(SimulationConfig::default()).unwrap();
        let mut aircraft = controller.new_aircraft();

        let result = controller.run(&mut aircraft);

        assert_eq!(aircraft.mass_current, result.path.last().unwrap().mass);
        assert!(aircraft.thrust < 13_600.0);
    }
}
