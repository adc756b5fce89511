use serde::{Deserialize, Serialize};

/// Measured flow quantities passed through to the output snapshot.
///
/// The engine never computes these; when a caller has gauge telemetry for
/// the water body it rides along so the snapshot is a complete hydro record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FlowHints {
    #[serde(default)]
    pub flow_m3_s: Option<f64>,
    #[serde(default)]
    pub water_level_m: Option<f64>,
}
