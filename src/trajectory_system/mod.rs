pub mod aerodynamics;
pub mod flight_path;
pub mod kinematics;
