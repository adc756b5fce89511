//! Normalizes a caller-supplied `MorphologyConfig` into the canonical
//! parameter set every downstream model consumes.
//!
//! Resolution never fails: missing fields fall back to the most
//! conservative classes (River / Urban / Medium) because callers routinely
//! hold partially-configured water bodies.

use fishcast_schemas::morphology::{BasinClass, DepthClass, MorphologyConfig, WaterBodyType};

/// Effective mean depth per depth class, in meters.
const DEPTH_BY_CLASS_M: [(DepthClass, f64); 3] = [
    (DepthClass::Shallow, 2.0),
    (DepthClass::Medium, 6.0),
    (DepthClass::Deep, 15.0),
];

/// Thermal bias per basin class, in degrees Celsius. Urban basins run warm
/// (heat island, low canopy); forested basins are taken as the unshifted
/// reference.
const BASIN_OFFSET_C: [(BasinClass, f64); 4] = [
    (BasinClass::Urban, 1.2),
    (BasinClass::Agricultural, 0.5),
    (BasinClass::Pasture, 0.3),
    (BasinClass::Forested, 0.0),
];

/// Resting suspended-sediment level per basin class, in NTU.
const BASIN_TURBIDITY_BASELINE_NTU: [(BasinClass, f64); 4] = [
    (BasinClass::Urban, 12.0),
    (BasinClass::Agricultural, 8.5),
    (BasinClass::Pasture, 6.0),
    (BasinClass::Forested, 4.5),
];

const DEFAULT_SURFACE_AREA_M2: f64 = 50_000.0;
const DEFAULT_SHAPE_FACTOR: f64 = 1.0;

/// Canonical morphology parameters consumed by the physical models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMorphology {
    pub water_body_type: WaterBodyType,
    pub effective_depth_m: f64,
    pub basin_offset_c: f64,
    pub basin_turbidity_baseline_ntu: f64,
    pub surface_area_m2: f64,
    pub shape_factor: f64,
}

/// Resolves a possibly partial config into a complete parameter set.
///
/// An explicit `mean_depth_m` wins over the depth class; when both are
/// absent the Medium default applies. The shape factor only has physical
/// meaning for standing water (fetch elongation), so flowing types force
/// it to 1.0.
pub fn resolve(config: &MorphologyConfig) -> ResolvedMorphology {
    let water_body_type = config.water_body_type.unwrap_or(WaterBodyType::River);
    let basin_class = config.basin_class.unwrap_or(BasinClass::Urban);
    let depth_class = config.depth_class.unwrap_or(DepthClass::Medium);

    let effective_depth_m = config
        .mean_depth_m
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or_else(|| lookup_depth(depth_class));

    let shape_factor = if water_body_type.is_flowing() {
        DEFAULT_SHAPE_FACTOR
    } else {
        config
            .shape_factor
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_SHAPE_FACTOR)
    };

    ResolvedMorphology {
        water_body_type,
        effective_depth_m,
        basin_offset_c: lookup(&BASIN_OFFSET_C, basin_class),
        basin_turbidity_baseline_ntu: lookup(&BASIN_TURBIDITY_BASELINE_NTU, basin_class),
        surface_area_m2: config
            .surface_area_m2
            .filter(|a| a.is_finite() && *a > 0.0)
            .unwrap_or(DEFAULT_SURFACE_AREA_M2),
        shape_factor,
    }
}

fn lookup_depth(class: DepthClass) -> f64 {
    DEPTH_BY_CLASS_M
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, d)| *d)
        .unwrap_or(6.0)
}

fn lookup(table: &[(BasinClass, f64)], class: BasinClass) -> f64 {
    table
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, v)| *v)
        .unwrap_or(table[0].1)
}
