use chrono::{DateTime, Utc};

/// The unified intermediate state threaded through every species scorer.
///
/// Built once per invocation by composing the upstream physical models;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BioContext {
    pub water_temperature_c: f64,
    pub cloud_cover_percent: f64,
    pub wind_speed_kmh: f64,
    /// Pressure change over the last ~3 h, in hPa; positive when rising.
    pub pressure_trend_3h_hpa: f64,
    pub turbidity_ntu: f64,
    pub dissolved_oxygen_mg_l: f64,
    pub wave_height_cm: f64,
    pub observed_at: DateTime<Utc>,
}
