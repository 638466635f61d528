use crate::config::MissionConfig;
use crate::trajectory_system::kinematics::FlightState;

// Height fractions where the schedule changes phase
const CLIMB_PHASE_END: f64 = 0.3;
const TRANSITION_PHASE_END: f64 = 0.7;

const CLIMB_AOA: f64 = 0.06; // rad
const TRANSITION_AOA: f64 = 0.04; // rad
const LEVEL_OFF_AOA: f64 = 0.02; // rad

/// Below this fraction of target speed the nose is lowered to gain speed.
const SPEED_DEFICIT_FRACTION: f64 = 0.9;
const SPEED_DEFICIT_AOA_REDUCTION: f64 = 0.01; // rad

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbPhase {
    Climb,
    Transition,
    LevelOff,
}

/// Piecewise angle-of-attack schedule driven by altitude progress and speed.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceSystem {
    pub target_altitude: f64,
    pub target_speed: f64, // m/s
}

impl GuidanceSystem {
    pub fn new(target_altitude: f64, target_speed: f64) -> Self {
        GuidanceSystem {
            target_altitude,
            target_speed,
        }
    }

    pub fn from_mission(mission: &MissionConfig) -> Self {
        Self::new(mission.target_altitude, mission.target_speed_ms())
    }

    pub fn phase(&self, altitude: f64) -> ClimbPhase {
        let height_fraction = altitude / self.target_altitude;

        if height_fraction < CLIMB_PHASE_END {
            ClimbPhase::Climb
        } else if height_fraction < TRANSITION_PHASE_END {
            ClimbPhase::Transition
        } else {
            ClimbPhase::LevelOff
        }
    }

    pub fn angle_of_attack_command(&self, state: &FlightState) -> f64 {
        let mut command = match self.phase(state.altitude) {
            ClimbPhase::Climb => CLIMB_AOA,
            ClimbPhase::Transition => TRANSITION_AOA,
            ClimbPhase::LevelOff => LEVEL_OFF_AOA,
        };

        if state.speed < self.target_speed * SPEED_DEFICIT_FRACTION {
            command -= SPEED_DEFICIT_AOA_REDUCTION;
        }

        command
    }
}
