use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single historical or current weather sample.
///
/// Supplied by the caller (typically from a weather-history provider) and
/// never mutated or stored by the engine. History arrays must be in
/// chronological order; the thermal and turbidity models are path-dependent
/// and fold over samples in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub timestamp: DateTime<Utc>,
    /// Air temperature at 2 m, in degrees Celsius.
    pub air_temperature_c: f64,
    /// Accumulated precipitation for the sample period, in millimeters.
    #[serde(default)]
    pub precipitation_mm: f64,
    /// Wind speed, in km/h.
    #[serde(default)]
    pub wind_speed_kmh: f64,
    /// Total cloud cover, 0-100.
    #[serde(default)]
    pub cloud_cover_percent: f64,
    /// Station pressure reduced to sea level, in hPa.
    #[serde(default = "default_pressure_hpa")]
    pub pressure_hpa: f64,
}

fn default_pressure_hpa() -> f64 {
    1013.25
}
