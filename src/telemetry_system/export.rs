use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::constants::KMH_PER_MS;
use crate::errors::SimulationError;
use crate::trajectory_system::flight_path::FlightPath;
use crate::trajectory_system::kinematics::FlightState;

pub const EXPORT_COLUMNS: [&str; 11] = [
    "time_s",
    "altitude_m",
    "velocity_ms",
    "velocity_kmh",
    "vertical_velocity_ms",
    "theta_deg",
    "alpha_deg",
    "fuel_kg",
    "mass_kg",
    "acceleration_ms2",
    "mach_number",
];

/// One CSV row. Field order matches [`EXPORT_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportRecord {
    pub time_s: f64,
    pub altitude_m: f64,
    pub velocity_ms: f64,
    pub velocity_kmh: f64,
    pub vertical_velocity_ms: f64,
    pub theta_deg: f64,
    pub alpha_deg: f64,
    pub fuel_kg: f64,
    pub mass_kg: f64,
    pub acceleration_ms2: f64,
    pub mach_number: f64,
}

impl From<&FlightState> for ExportRecord {
    fn from(state: &FlightState) -> Self {
        ExportRecord {
            time_s: state.time,
            altitude_m: state.altitude,
            velocity_ms: state.speed,
            velocity_kmh: state.speed * KMH_PER_MS,
            vertical_velocity_ms: state.vertical_speed,
            theta_deg: state.flight_path_angle.to_degrees(),
            alpha_deg: state.angle_of_attack.to_degrees(),
            fuel_kg: state.fuel_used,
            mass_kg: state.mass,
            acceleration_ms2: state.acceleration,
            mach_number: state.mach,
        }
    }
}

/// Writes the header and one row per state.
pub fn write_csv<W: Write>(writer: W, path: &FlightPath) -> Result<(), SimulationError> {
    // Header written by hand so an empty path still gets one.
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(EXPORT_COLUMNS)?;
    for state in path {
        csv_writer.serialize(ExportRecord::from(state))?;
    }
    csv_writer.flush()?;

    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(file: P, path: &FlightPath) -> Result<(), SimulationError> {
    let handle = std::fs::File::create(file)?;
    write_csv(std::io::BufWriter::new(handle), path)
}
