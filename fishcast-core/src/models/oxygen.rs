//! Dissolved-oxygen model: Henry's-law-style saturation as a cubic in
//! water temperature, corrected for station pressure relative to sea level.

/// Saturation polynomial coefficients (mg/L as a function of deg C).
const SAT_C0: f64 = 14.652;
const SAT_C1: f64 = -0.41022;
const SAT_C2: f64 = 0.007991;
const SAT_C3: f64 = -0.000077774;

const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// Dissolved oxygen above this supports full activity, in mg/L.
const DO_FULL_ACTIVITY: f64 = 6.5;
/// Near-hypoxic floor, in mg/L.
const DO_HYPOXIC: f64 = 3.5;
/// Activity is floored here rather than at zero to avoid score
/// discontinuities in near-hypoxic water.
const ACTIVITY_FLOOR: f64 = 0.05;

/// Oxygen saturation concentration at `water_temp_c`, in mg/L.
fn saturation(water_temp_c: f64) -> f64 {
    let t = water_temp_c;
    SAT_C0 + SAT_C1 * t + SAT_C2 * t * t + SAT_C3 * t * t * t
}

/// Dissolved-oxygen concentration, in mg/L.
pub fn dissolved_oxygen(water_temp_c: f64, pressure_hpa: f64) -> f64 {
    saturation(water_temp_c) * pressure_hpa / SEA_LEVEL_PRESSURE_HPA
}

/// Piecewise-linear activity factor in [0.05, 1.0] fed to every scorer.
///
/// The interpolation breakpoints are calibrated values; keep them as
/// documented.
pub fn activity_factor(dissolved_oxygen_mg_l: f64) -> f64 {
    if dissolved_oxygen_mg_l >= DO_FULL_ACTIVITY {
        1.0
    } else if dissolved_oxygen_mg_l <= DO_HYPOXIC {
        ACTIVITY_FLOOR
    } else {
        let span = DO_FULL_ACTIVITY - DO_HYPOXIC;
        ACTIVITY_FLOOR
            + (1.0 - ACTIVITY_FLOOR) * (dissolved_oxygen_mg_l - DO_HYPOXIC) / span
    }
}
