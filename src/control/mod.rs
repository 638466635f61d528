pub mod aircraft;
pub mod environment;
pub mod guidance;
pub mod mission;
