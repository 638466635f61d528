use tracing::trace;

use crate::config::SimulationConfig;
use crate::control::environment::AtmosphereModel;
use crate::trajectory_system::aerodynamics::Aerodynamics;
use crate::trajectory_system::kinematics::{
    apply_ground_guard, apply_speed_floor, clamp_angle_of_attack, clamp_flight_path_angle,
    FlightState,
};

/// Point-mass longitudinal model of the aircraft.
///
/// Position, velocity and attitude travel in the [`FlightState`] values passed
/// through [`propagate`](Self::propagate). The model itself only carries the
/// current mass and thrust, which each step updates for the next one. Use a
/// fresh instance per run.
#[derive(Debug, Clone)]
pub struct AircraftDynamics {
    pub aerodynamics: Aerodynamics,
    atmosphere: AtmosphereModel,
    initial_mass: f64,
    rated_thrust: f64,
    throttle_setting: f64,
    gravity: f64,
    pub mass_current: f64,
    pub thrust: f64,
    pub fuel_burn_rate: f64,
}

impl AircraftDynamics {
    pub fn new(config: &SimulationConfig, atmosphere: AtmosphereModel) -> Self {
        let aircraft = &config.aircraft;

        AircraftDynamics {
            aerodynamics: Aerodynamics::from_config(aircraft),
            atmosphere,
            initial_mass: aircraft.baseline_mass,
            rated_thrust: aircraft.total_thrust,
            throttle_setting: aircraft.throttle_setting,
            gravity: config.run.gravity,
            mass_current: aircraft.baseline_mass,
            thrust: aircraft.total_thrust * aircraft.throttle_setting,
            fuel_burn_rate: aircraft.fuel_burn_rate,
        }
    }

    pub fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    pub fn atmosphere(&self) -> &AtmosphereModel {
        &self.atmosphere
    }

    pub fn lift_coefficient(&self, angle_of_attack: f64) -> f64 {
        self.aerodynamics.lift_coefficient(angle_of_attack)
    }

    pub fn drag_coefficient(&self, lift_coefficient: f64) -> f64 {
        self.aerodynamics.drag_coefficient(lift_coefficient)
    }

    pub fn lift(&self, velocity: f64, altitude: f64, angle_of_attack: f64) -> f64 {
        self.aerodynamics
            .calculate_lift(velocity, altitude, angle_of_attack, &self.atmosphere)
    }

    pub fn drag(&self, velocity: f64, altitude: f64, angle_of_attack: f64) -> f64 {
        self.aerodynamics
            .calculate_drag(velocity, altitude, angle_of_attack, &self.atmosphere)
    }

    /// Advances `current` by one step of `time_step` seconds flying the
    /// commanded angle of attack.
    ///
    /// The flight-path angle update is the heuristic
    /// `atan2(a_across, a_along + g·sin θ)`, not a rate equation. Neither
    /// argument is guarded, so a negative along-path term can flip the sign
    /// of the result before it is clamped.
    ///
    /// Mass has no floor: a run long enough to burn through the whole
    /// airframe divides by zero or a negative mass.
    pub fn propagate(
        &mut self,
        current: &FlightState,
        time_step: f64,
        commanded_aoa: f64,
    ) -> FlightState {
        let angle_of_attack = clamp_angle_of_attack(commanded_aoa);
        let g = self.gravity;

        let lift = self.lift(current.speed, current.altitude, angle_of_attack);
        let drag = self.drag(current.speed, current.altitude, angle_of_attack);

        let (sin_theta, cos_theta) = current.flight_path_angle.sin_cos();
        let force_along = self.thrust - drag - self.mass_current * g * sin_theta;
        let force_across = lift - self.mass_current * g * cos_theta;

        let accel_along = force_along / self.mass_current;
        let accel_across = force_across / self.mass_current;

        let speed = apply_speed_floor(current.speed + accel_along * time_step);

        let mut flight_path_angle = current.flight_path_angle;
        if speed > 0.0 {
            flight_path_angle = accel_across.atan2(accel_along + g * sin_theta);
        }
        let flight_path_angle = clamp_flight_path_angle(flight_path_angle);

        let horizontal_speed = speed * flight_path_angle.cos();
        let vertical_speed = speed * flight_path_angle.sin();

        let distance = current.distance + horizontal_speed * time_step;
        let (altitude, vertical_speed) =
            apply_ground_guard(current.altitude + vertical_speed * time_step, vertical_speed);

        let fuel_burned = self.fuel_burn_rate * time_step;
        let fuel_used = current.fuel_used + fuel_burned;
        let mass = current.mass - fuel_burned;

        // Takes effect on the next call.
        self.mass_current = mass;
        self.thrust = self.rated_thrust * self.throttle_setting * (mass / self.initial_mass);

        trace!(
            lift,
            drag,
            accel_along,
            accel_across,
            thrust = self.thrust,
            "propagated state"
        );

        FlightState {
            time: current.time + time_step,
            distance,
            altitude,
            speed,
            horizontal_speed,
            vertical_speed,
            flight_path_angle,
            angle_of_attack,
            fuel_used,
            mass,
            acceleration: accel_along,
            mach: self.atmosphere.mach_number(speed, altitude),
        }
    }
}
