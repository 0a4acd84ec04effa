//! Point-in-time environmental readings.

use serde::{Deserialize, Serialize};

/// A point-in-time set of simulated environmental sensor readings.
///
/// Humidity fields are percentages and always stay within `[0, 100]`;
/// the remaining fields are unbounded in the mock model. Snapshots are
/// never persisted and are recreated with fixed initial values on every
/// process start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Soil humidity in percent, clamped to [0, 100]
    pub soil_humidity: f64,
    /// Nitrogen index (kg/ha)
    pub nitrogen: f64,
    /// Phosphorus index (kg/ha)
    pub phosphorus: f64,
    /// Potassium index (kg/ha)
    pub potassium: f64,
    /// Soil pH
    pub soil_ph: f64,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// External (air) humidity in percent, clamped to [0, 100]
    pub external_humidity: f64,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            soil_humidity: 42.0,
            nitrogen: 120.0,
            phosphorus: 85.0,
            potassium: 110.0,
            soil_ph: 6.5,
            temperature: 24.0,
            external_humidity: 65.0,
        }
    }
}
