use std::sync::Arc;

use crate::errors::SimulationError;

/// One row of the standard atmosphere table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereSample {
    pub altitude: f64,    // m
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m³
    pub sound_speed: f64, // m/s
}

const fn sample(
    altitude: f64,
    temperature: f64,
    pressure: f64,
    density: f64,
    sound_speed: f64,
) -> AtmosphereSample {
    AtmosphereSample {
        altitude,
        temperature,
        pressure,
        density,
        sound_speed,
    }
}

/// ISA reference values, sea level to 6 km in 500 m steps.
pub static STANDARD_ATMOSPHERE: [AtmosphereSample; 13] = [
    sample(0.0, 288.15, 101_325.0, 1.2250, 340.29),
    sample(500.0, 284.90, 95_463.0, 1.1673, 338.37),
    sample(1_000.0, 281.65, 89_976.0, 1.1117, 336.44),
    sample(1_500.0, 278.40, 84_808.0, 1.0581, 334.50),
    sample(2_000.0, 275.15, 79_916.0, 1.0066, 332.54),
    sample(2_500.0, 271.90, 75_260.0, 0.9570, 330.57),
    sample(3_000.0, 268.65, 70_801.0, 0.9093, 328.58),
    sample(3_500.0, 265.40, 66_604.0, 0.8635, 326.58),
    sample(4_000.0, 262.15, 62_634.0, 0.8196, 324.56),
    sample(4_500.0, 258.90, 58_860.0, 0.7775, 322.52),
    sample(5_000.0, 255.65, 55_252.0, 0.7369, 320.47),
    sample(5_500.0, 252.40, 51_881.0, 0.6979, 318.40),
    sample(6_000.0, 249.15, 48_720.0, 0.6605, 316.31),
];

/// Table-driven atmosphere.
///
/// Values between two samples are linearly interpolated. Outside the table the
/// nearest edge sample is returned unchanged, so any altitude (negative, NaN,
/// far above the ceiling) yields a usable value.
///
/// Clones share the same table.
#[derive(Debug, Clone)]
pub struct AtmosphereModel {
    table: Arc<[AtmosphereSample]>,
}

impl AtmosphereModel {
    pub fn standard() -> Self {
        AtmosphereModel {
            table: Arc::from(&STANDARD_ATMOSPHERE[..]),
        }
    }

    /// Table must be non-empty and strictly increasing in altitude.
    pub fn from_table(table: Vec<AtmosphereSample>) -> Result<Self, SimulationError> {
        if table.is_empty() {
            return Err(SimulationError::InitializationError(
                "atmosphere table has no samples".to_string(),
            ));
        }
        let ordered = table.windows(2).all(|pair| pair[0].altitude < pair[1].altitude);
        if !ordered || !table.iter().all(|s| s.altitude.is_finite()) {
            return Err(SimulationError::InitializationError(
                "atmosphere table altitudes must be finite and strictly increasing".to_string(),
            ));
        }
        Ok(AtmosphereModel {
            table: Arc::from(table),
        })
    }

    pub fn temperature(&self, altitude: f64) -> f64 {
        self.interpolate(altitude, |s| s.temperature)
    }

    pub fn pressure(&self, altitude: f64) -> f64 {
        self.interpolate(altitude, |s| s.pressure)
    }

    pub fn density(&self, altitude: f64) -> f64 {
        self.interpolate(altitude, |s| s.density)
    }

    pub fn sound_speed(&self, altitude: f64) -> f64 {
        self.interpolate(altitude, |s| s.sound_speed)
    }

    pub fn mach_number(&self, velocity: f64, altitude: f64) -> f64 {
        velocity / self.sound_speed(altitude)
    }

    fn interpolate(&self, altitude: f64, field: impl Fn(&AtmosphereSample) -> f64) -> f64 {
        let first = &self.table[0];
        let last = &self.table[self.table.len() - 1];

        if altitude <= first.altitude {
            return field(first);
        }
        if altitude >= last.altitude {
            return field(last);
        }

        // Half-open brackets: a query on a sample point resolves to that
        // sample with fraction 0.
        for pair in self.table.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if altitude >= lower.altitude && altitude < upper.altitude {
                let fraction = (altitude - lower.altitude) / (upper.altitude - lower.altitude);
                return field(lower) + fraction * (field(upper) - field(lower));
            }
        }

        field(last)
    }
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self::standard()
    }
}
