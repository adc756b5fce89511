//! The engine's single output contract.
//!
//! An `EnvironmentalSnapshot` is constructed fresh on every invocation and
//! returned to the caller; it has no identity or storage of its own. Any
//! caching or persistence is the caller's responsibility.

use crate::species::Species;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distinguishes model-derived estimates from sensor-measured telemetry,
/// for callers that hold both on the same contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Produced by the simulation engine from weather history.
    Modeled,
    /// Ground-truth readings from instruments on the water body.
    Measured,
}

/// Normalized copy of the current weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBlock {
    pub air_temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub cloud_cover_percent: f64,
    pub pressure_hpa: f64,
    /// Pressure change over the last ~3 h, in hPa. Positive means rising.
    pub pressure_trend_3h_hpa: f64,
}

/// Derived (or passed-through) water-side quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydroBlock {
    pub water_temperature_c: f64,
    pub turbidity_ntu: f64,
    pub dissolved_oxygen_mg_l: f64,
    pub wave_height_cm: f64,
    /// Pass-through gauge flow, never computed here.
    #[serde(default)]
    pub flow_m3_s: Option<f64>,
    /// Pass-through gauge level, never computed here.
    #[serde(default)]
    pub water_level_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub calculated_at: DateTime<Utc>,
    pub mode: CalculationMode,
}

/// Complete engine output for one water body at one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSnapshot {
    pub weather: WeatherBlock,
    pub hydro: HydroBlock,
    /// One integer activity score in 0-100 per supported species.
    pub scores: BTreeMap<Species, u8>,
    pub metadata: SnapshotMetadata,
}
