use crate::config::SimulationConfig;
use crate::constants::{
    GROUND_RECOVERY_ALTITUDE, INITIAL_ANGLE_OF_ATTACK, INITIAL_FLIGHT_PATH_ANGLE,
    INITIAL_VERTICAL_SPEED, KMH_PER_MS, MAX_ANGLE_OF_ATTACK, MAX_FLIGHT_PATH_ANGLE,
    MIN_ANGLE_OF_ATTACK, MIN_SPEED,
};
use crate::control::environment::AtmosphereModel;

/// Snapshot of the aircraft at one instant of simulated time.
///
/// Angles are stored in radians; conversion to degrees happens at export.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightState {
    pub time: f64,              // s
    pub distance: f64,          // m, horizontal
    pub altitude: f64,          // m
    pub speed: f64,             // m/s
    pub horizontal_speed: f64,  // m/s
    pub vertical_speed: f64,    // m/s
    pub flight_path_angle: f64, // rad
    pub angle_of_attack: f64,   // rad
    pub fuel_used: f64,         // kg
    pub mass: f64,              // kg
    pub acceleration: f64,      // m/s², along the path
    pub mach: f64,
}

impl FlightState {
    /// State at t = 0 for the configured mission.
    ///
    /// The velocity components are the fixed launch values, not derived from
    /// the flight-path angle.
    pub fn initial(config: &SimulationConfig, atmosphere: &AtmosphereModel) -> Self {
        let speed = config.mission.start_speed_ms();
        let altitude = config.mission.start_altitude;

        FlightState {
            time: 0.0,
            distance: 0.0,
            altitude,
            speed,
            horizontal_speed: speed,
            vertical_speed: INITIAL_VERTICAL_SPEED,
            flight_path_angle: INITIAL_FLIGHT_PATH_ANGLE,
            angle_of_attack: INITIAL_ANGLE_OF_ATTACK,
            fuel_used: 0.0,
            mass: config.aircraft.baseline_mass,
            acceleration: 0.0,
            mach: atmosphere.mach_number(speed, altitude),
        }
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed * KMH_PER_MS
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Time: {:.1}s | Altitude: {:.1}m | Speed: {:.1}km/h | Vertical speed: {:.1}m/s | Angle: {:.1}° | Mass: {:.1}kg",
            self.time,
            self.altitude,
            self.speed_kmh(),
            self.vertical_speed,
            self.flight_path_angle.to_degrees(),
            self.mass
        )
    }
}

pub fn clamp_angle_of_attack(angle_of_attack: f64) -> f64 {
    angle_of_attack.clamp(MIN_ANGLE_OF_ATTACK, MAX_ANGLE_OF_ATTACK)
}

pub fn clamp_flight_path_angle(flight_path_angle: f64) -> f64 {
    flight_path_angle.clamp(-MAX_FLIGHT_PATH_ANGLE, MAX_FLIGHT_PATH_ANGLE)
}

pub fn apply_speed_floor(speed: f64) -> f64 {
    speed.max(MIN_SPEED)
}

/// Pulls a below-ground altitude back up and stops any further descent.
/// Returns the corrected `(altitude, vertical_speed)`.
pub fn apply_ground_guard(altitude: f64, vertical_speed: f64) -> (f64, f64) {
    if altitude < 0.0 {
        (GROUND_RECOVERY_ALTITUDE, vertical_speed.max(0.0))
    } else {
        (altitude, vertical_speed)
    }
}
