pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use config::{AircraftConfig, MissionConfig, RunConfig, SimulationConfig};
pub use constants::*;
pub use control::aircraft::AircraftDynamics;
pub use control::environment::{AtmosphereModel, AtmosphereSample, STANDARD_ATMOSPHERE};
pub use control::guidance::{ClimbPhase, GuidanceSystem};
pub use control::mission::{RunOutcome, SimulationRun, TrajectoryController};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::flight_path::FlightPath;
pub use trajectory_system::kinematics::FlightState;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::export::{write_csv, write_csv_file, ExportRecord, EXPORT_COLUMNS};
pub use telemetry_system::telemetry::{FlightSummary, Telemetry};
