use tracing::info;

use crate::config::MissionConfig;
use crate::control::mission::{RunOutcome, SimulationRun};
use crate::trajectory_system::flight_path::FlightPath;
use crate::trajectory_system::kinematics::FlightState;

/// End-of-run figures derived from a flight path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub outcome: RunOutcome,
    pub steps: usize,
    pub final_altitude: f64,
    pub target_fraction: f64,
    pub final_speed_kmh: f64,
    pub duration: f64,
    pub fuel_consumed: f64,
    pub final_mach: f64,
    pub max_altitude: f64,
    pub max_mach: f64,
}

impl FlightSummary {
    pub fn from_path(path: &FlightPath, mission: &MissionConfig) -> Option<Self> {
        let last = path.last()?;

        Some(FlightSummary {
            outcome: RunOutcome::classify(last, mission),
            steps: path.len().saturating_sub(1),
            final_altitude: last.altitude,
            target_fraction: last.altitude / mission.target_altitude,
            final_speed_kmh: last.speed_kmh(),
            duration: path.total_duration(),
            fuel_consumed: path.total_fuel_consumed(),
            final_mach: last.mach,
            max_altitude: path.max_altitude(),
            max_mach: path.max_mach(),
        })
    }

    pub fn from_run(run: &SimulationRun, mission: &MissionConfig) -> Option<Self> {
        let mut summary = Self::from_path(&run.path, mission)?;
        summary.outcome = run.outcome;
        Some(summary)
    }
}

pub struct Telemetry;

impl Telemetry {
    pub fn format_time(elapsed_time: f64) -> String {
        // Round first so 59.96 s shows as 1m 0.0s, not 60.0s
        let elapsed_time = (elapsed_time * 10.0).round() / 10.0;
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time - minutes * 60.0;
            format!("{:.0}m {:.1}s", minutes, seconds)
        } else {
            format!("{:.1}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.1} m", altitude)
        }
    }

    pub fn log_progress(step: usize, state: &FlightState) {
        info!(
            "Step {} | Time: {} | Altitude: {} | Speed: {:.1} km/h",
            step,
            Self::format_time(state.time),
            Self::format_altitude(state.altitude),
            state.speed_kmh()
        );
    }

    pub fn report(summary: &FlightSummary) -> Vec<String> {
        vec![
            format!("Outcome: {:?}", summary.outcome),
            format!(
                "Final altitude: {} ({:.1}% of target)",
                Self::format_altitude(summary.final_altitude),
                summary.target_fraction * 100.0
            ),
            format!("Final speed: {:.1} km/h", summary.final_speed_kmh),
            format!(
                "Total time: {} ({} steps)",
                Self::format_time(summary.duration),
                summary.steps
            ),
            format!("Fuel used: {:.1} kg", summary.fuel_consumed),
            format!("Mach number: {:.3}", summary.final_mach),
            format!(
                "Max altitude: {} | Max Mach: {:.3}",
                Self::format_altitude(summary.max_altitude),
                summary.max_mach
            ),
        ]
    }

    pub fn log_summary(summary: &FlightSummary) {
        info!("--- Simulation Summary ---");
        for line in Self::report(summary) {
            info!("{}", line);
        }
    }
}
