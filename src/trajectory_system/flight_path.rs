use super::kinematics::FlightState;

/// Append-only record of a run, one state per simulated step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightPath {
    points: Vec<FlightState>,
}

impl FlightPath {
    pub fn new() -> Self {
        FlightPath { points: Vec::new() }
    }

    pub fn append(&mut self, state: FlightState) {
        self.points.push(state);
    }

    pub fn all_points(&self) -> &[FlightState] {
        &self.points
    }

    pub fn into_points(self) -> Vec<FlightState> {
        self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlightState> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&FlightState> {
        self.points.last()
    }

    pub fn total_duration(&self) -> f64 {
        self.points.last().map_or(0.0, |state| state.time)
    }

    pub fn total_fuel_consumed(&self) -> f64 {
        self.points.last().map_or(0.0, |state| state.fuel_used)
    }

    pub fn max_altitude(&self) -> f64 {
        self.points
            .iter()
            .map(|state| state.altitude)
            .fold(0.0, f64::max)
    }

    pub fn max_mach(&self) -> f64 {
        self.points.iter().map(|state| state.mach).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a FlightPath {
    type Item = &'a FlightState;
    type IntoIter = std::slice::Iter<'a, FlightState>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
