use crate::config::AircraftConfig;
use crate::control::environment::AtmosphereModel;

/// Linear lift curve with a saturation limit and a parabolic drag polar.
#[derive(Debug, Clone, PartialEq)]
pub struct Aerodynamics {
    pub wing_area: f64,
    pub lift_slope: f64,
    pub max_lift_coeff: f64,
    pub drag_coeff_zero: f64,
    pub induced_drag_coeff: f64,
}

impl Aerodynamics {
    pub fn new(
        wing_area: f64,
        lift_slope: f64,
        max_lift_coeff: f64,
        drag_coeff_zero: f64,
        induced_drag_coeff: f64,
    ) -> Self {
        Aerodynamics {
            wing_area,
            lift_slope,
            max_lift_coeff,
            drag_coeff_zero,
            induced_drag_coeff,
        }
    }

    pub fn from_config(config: &AircraftConfig) -> Self {
        Self::new(
            config.wing_area,
            config.lift_slope,
            config.max_lift_coeff,
            config.drag_coeff_zero,
            config.induced_drag_coeff,
        )
    }

    pub fn lift_coefficient(&self, angle_of_attack: f64) -> f64 {
        (self.lift_slope * angle_of_attack).min(self.max_lift_coeff)
    }

    pub fn drag_coefficient(&self, lift_coefficient: f64) -> f64 {
        self.drag_coeff_zero + self.induced_drag_coeff * lift_coefficient * lift_coefficient
    }

    pub fn dynamic_pressure(density: f64, velocity: f64) -> f64 {
        0.5 * density * velocity * velocity
    }

    pub fn calculate_lift(
        &self,
        velocity: f64,
        altitude: f64,
        angle_of_attack: f64,
        atmosphere: &AtmosphereModel,
    ) -> f64 {
        let cl = self.lift_coefficient(angle_of_attack);
        let q = Self::dynamic_pressure(atmosphere.density(altitude), velocity);
        cl * self.wing_area * q
    }

    pub fn calculate_drag(
        &self,
        velocity: f64,
        altitude: f64,
        angle_of_attack: f64,
        atmosphere: &AtmosphereModel,
    ) -> f64 {
        let cd = self.drag_coefficient(self.lift_coefficient(angle_of_attack));
        let q = Self::dynamic_pressure(atmosphere.density(altitude), velocity);
        cd * self.wing_area * q
    }
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Self::from_config(&AircraftConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_lift_coefficient_linear_region() {
        let aero = Aerodynamics::default();

        assert_relative_eq!(aero.lift_coefficient(0.0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(aero.lift_coefficient(0.06), 0.3, epsilon = EPSILON);
        assert_relative_eq!(aero.lift_coefficient(-0.1), -0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_lift_coefficient_saturates() {
        let aero = Aerodynamics::default();

        // 5.0 * 0.3 = 1.5 exceeds the 1.2 limit
        assert_relative_eq!(aero.lift_coefficient(0.3), 1.2, epsilon = EPSILON);
        assert_relative_eq!(aero.lift_coefficient(1.0), 1.2, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_polar() {
        let aero = Aerodynamics::default();

        assert_relative_eq!(aero.drag_coefficient(0.0), 0.02, epsilon = EPSILON);
        assert_relative_eq!(aero.drag_coefficient(0.3), 0.02 + 0.05 * 0.09, epsilon = EPSILON);
        // Symmetric in the lift coefficient
        assert_relative_eq!(
            aero.drag_coefficient(-0.5),
            aero.drag_coefficient(0.5),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_dynamic_pressure() {
        assert_relative_eq!(
            Aerodynamics::dynamic_pressure(1.225, 100.0),
            6_125.0,
            epsilon = EPSILON
        );
        assert_eq!(Aerodynamics::dynamic_pressure(1.225, 0.0), 0.0);
    }

    #[test]
    fn test_forces_at_sea_level() {
        let aero = Aerodynamics::default();
        let atmosphere = AtmosphereModel::standard();

        let q = 0.5 * 1.225 * 100.0 * 100.0;
        let lift = aero.calculate_lift(100.0, 0.0, 0.06, &atmosphere);
        let drag = aero.calculate_drag(100.0, 0.0, 0.06, &atmosphere);

        assert_relative_eq!(lift, 0.3 * 127.3 * q, epsilon = 1e-6);
        assert_relative_eq!(drag, 0.0245 * 127.3 * q, epsilon = 1e-6);
    }

    #[test]
    fn test_forces_scale_with_density() {
        let aero = Aerodynamics::default();
        let atmosphere = AtmosphereModel::standard();

        let low = aero.calculate_drag(150.0, 0.0, 0.04, &atmosphere);
        let high = aero.calculate_drag(150.0, 6_000.0, 0.04, &atmosphere);

        assert_relative_eq!(high / low, 0.6605 / 1.2250, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_velocity_edge_case() {
        let aero = Aerodynamics::default();
        let atmosphere = AtmosphereModel::standard();

        assert_eq!(aero.calculate_lift(0.0, 1_000.0, 0.1, &atmosphere), 0.0);
        assert_eq!(aero.calculate_drag(0.0, 1_000.0, 0.1, &atmosphere), 0.0);
    }
}
