// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const KMH_PER_MS: f64 = 3.6;

// Aircraft Constants (Tu-154 class airliner)
pub const MASS_BASELINE: f64 = 43_000.0; // kg
pub const WING_AREA: f64 = 127.3; // m²
pub const THRUST_TOTAL: f64 = 2.0 * 6_800.0; // N, both engines
pub const THROTTLE_SETTING: f64 = 1.0;
pub const FUEL_BURN_RATE: f64 = 2.5; // kg/s

// Aerodynamic Constants
pub const DRAG_COEFF_ZERO: f64 = 0.02;
pub const INDUCED_DRAG_COEFF: f64 = 0.05;
pub const MAX_LIFT_COEFF: f64 = 1.2;
pub const LIFT_SLOPE: f64 = 5.0; // per rad

// Mission Constants
pub const ALT_START: f64 = 300.0; // m
pub const ALT_TARGET: f64 = 6_000.0; // m
pub const VEL_INITIAL_KMH: f64 = 310.0;
pub const VEL_TARGET_KMH: f64 = 700.0;

// Initial attitude
pub const INITIAL_VERTICAL_SPEED: f64 = 5.0; // m/s
pub const INITIAL_FLIGHT_PATH_ANGLE: f64 = 0.05; // rad
pub const INITIAL_ANGLE_OF_ATTACK: f64 = 0.03; // rad

// State envelope
pub const MIN_SPEED: f64 = 100.0; // m/s, stall floor
pub const MIN_ANGLE_OF_ATTACK: f64 = -0.1; // rad
pub const MAX_ANGLE_OF_ATTACK: f64 = 0.2; // rad
pub const MAX_FLIGHT_PATH_ANGLE: f64 = 0.3; // rad
pub const GROUND_RECOVERY_ALTITUDE: f64 = 10.0; // m

// Abort limits
pub const ENVELOPE_MAX_ALTITUDE: f64 = 20_000.0; // m
pub const ENVELOPE_MAX_SPEED: f64 = 1_000.0; // m/s

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const MAX_SIMULATION_TIME: f64 = 600.0; // s
pub const MAX_SIMULATION_STEPS: usize = 10_000_000;
pub const PROGRESS_INTERVAL: usize = 30; // steps
