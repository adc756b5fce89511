//! Describes the physical shape and surroundings of a water body.
//!
//! Every field is optional: callers often hold partially-configured water
//! bodies, and the engine substitutes conservative defaults rather than
//! rejecting them.

use serde::{Deserialize, Serialize};

/// High-level classification of a water body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterBodyType {
    River,
    Pond,
    MediumChannel,
    DeepLake,
}

impl WaterBodyType {
    /// Flowing water: fast mixing, bounded fetch, fixed thermal inertia.
    pub fn is_flowing(self) -> bool {
        matches!(self, WaterBodyType::River | WaterBodyType::MediumChannel)
    }
}

/// Coarse land-use category around the water body, used as a proxy for
/// runoff and thermal behavior of the basin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasinClass {
    Urban,
    Agricultural,
    Pasture,
    Forested,
}

/// Depth band used when no explicit mean depth is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthClass {
    /// Less than 3 m mean depth.
    Shallow,
    /// 3-15 m mean depth.
    Medium,
    /// More than 15 m mean depth.
    Deep,
}

/// Caller-supplied description of a water body.
///
/// Exactly one of `mean_depth_m` or `depth_class` determines the depth used
/// downstream; an explicit `mean_depth_m` wins, and when both are absent a
/// medium-depth default applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MorphologyConfig {
    #[serde(default)]
    pub water_body_type: Option<WaterBodyType>,
    #[serde(default)]
    pub basin_class: Option<BasinClass>,
    #[serde(default)]
    pub depth_class: Option<DepthClass>,
    /// Explicit mean depth override, in meters.
    #[serde(default)]
    pub mean_depth_m: Option<f64>,
    /// Water surface area, in square meters.
    #[serde(default)]
    pub surface_area_m2: Option<f64>,
    /// Dimensionless elongation ratio; ignored for flowing water.
    #[serde(default)]
    pub shape_factor: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_to_all_none() {
        let config: MorphologyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MorphologyConfig::default());
    }

    #[test]
    fn snake_case_tags_round_trip() {
        let json = serde_json::to_string(&WaterBodyType::MediumChannel).unwrap();
        assert_eq!(json, "\"medium_channel\"");
        let parsed: BasinClass = serde_json::from_str("\"agricultural\"").unwrap();
        assert_eq!(parsed, BasinClass::Agricultural);
    }
}
