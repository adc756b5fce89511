//! Air-to-water heat transfer (Air2Water family).
//!
//! A first-order lumped-thermal-inertia recurrence integrated once per
//! history sample. Water temperature is path-dependent, so the model folds
//! over the full ordered history instead of looking only at the query-time
//! observation. The fold must stay a sequential, order-preserving loop:
//! reordering the floating-point sums would silently change results and
//! break the bit-for-bit determinism contract.

use crate::models::morphology::ResolvedMorphology;
use chrono::Datelike;
use fishcast_schemas::weather::WeatherObservation;

/// Thermal inertia for flowing water (fast mixing, shallow flow).
const RIVER_DELTA: f64 = 14.0;
/// Inertia scaling for standing water: `0.207 * depth^1.35`.
const STANDING_DELTA_COEFF: f64 = 0.207;
const STANDING_DELTA_EXP: f64 = 1.35;
/// Day-of-year of the northern summer solstice, the phase reference for
/// the seasonal solar forcing term.
const SOLSTICE_DOY: f64 = 172.0;

/// Thermal inertia coefficient for the resolved water body.
fn delta(morphology: &ResolvedMorphology) -> f64 {
    if morphology.water_body_type.is_flowing() {
        RIVER_DELTA
    } else {
        STANDING_DELTA_COEFF * morphology.effective_depth_m.powf(STANDING_DELTA_EXP)
    }
}

/// Seasonal solar forcing for one day: `mu * sin(2pi (doy - 172) / 365)`
/// with `mu = 0.5 + 1/depth` (shallower water sees stronger forcing).
fn solar_term(day_of_year: f64, depth_m: f64) -> f64 {
    let mu = 0.5 + 1.0 / depth_m;
    mu * (std::f64::consts::TAU * (day_of_year - SOLSTICE_DOY) / 365.0).sin()
}

/// Integrates water temperature across the supplied history, in degrees
/// Celsius.
///
/// Seeded from the first history sample's air temperature; with an empty
/// history the seed falls back to the current observation so short inputs
/// still yield a usable value rather than an error.
pub fn water_temperature(
    history: &[WeatherObservation],
    current: &WeatherObservation,
    morphology: &ResolvedMorphology,
) -> f64 {
    let seed = history
        .first()
        .map(|obs| obs.air_temperature_c)
        .unwrap_or(current.air_temperature_c);

    let delta = delta(morphology);
    let mut water_temp = seed;
    for obs in history {
        let doy = obs.timestamp.ordinal() as f64;
        let forcing = (obs.air_temperature_c + morphology.basin_offset_c) - water_temp;
        water_temp += forcing / delta + solar_term(doy, morphology.effective_depth_m);
    }
    water_temp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::morphology::resolve;
    use chrono::{Duration, TimeZone, Utc};
    use fishcast_schemas::morphology::{DepthClass, MorphologyConfig, WaterBodyType};

    fn obs(days_ago: i64, air: f64) -> WeatherObservation {
        WeatherObservation {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::days(days_ago),
            air_temperature_c: air,
            precipitation_mm: 0.0,
            wind_speed_kmh: 5.0,
            cloud_cover_percent: 20.0,
            pressure_hpa: 1013.25,
        }
    }

    #[test]
    fn empty_history_returns_current_air_seed() {
        let morphology = resolve(&MorphologyConfig::default());
        let current = obs(0, 12.0);
        assert_eq!(water_temperature(&[], &current, &morphology), 12.0);
    }

    #[test]
    fn single_sample_returns_its_seed() {
        let morphology = resolve(&MorphologyConfig::default());
        let history = vec![obs(1, 9.0)];
        let temp = water_temperature(&history, &obs(0, 20.0), &morphology);
        // One update step away from the 9.0 seed, well inside the air envelope.
        assert!(temp.is_finite());
        assert!((temp - 9.0).abs() < 2.0);
    }

    #[test]
    fn water_lags_behind_a_sudden_air_swing() {
        let morphology = resolve(&MorphologyConfig {
            water_body_type: Some(WaterBodyType::DeepLake),
            depth_class: Some(DepthClass::Deep),
            ..Default::default()
        });
        let mut history: Vec<_> = (0..30).map(|i| obs(30 - i, 10.0)).collect();
        // Three final days of a heat spike.
        for sample in history.iter_mut().rev().take(3) {
            sample.air_temperature_c = 30.0;
        }
        let temp = water_temperature(&history, &obs(0, 30.0), &morphology);
        // Deep water cannot reach the new air temperature in three days.
        assert!(temp < 20.0, "deep lake warmed too fast: {temp}");
    }

    #[test]
    fn fold_is_deterministic() {
        let morphology = resolve(&MorphologyConfig::default());
        let history: Vec<_> = (0..45)
            .map(|i| obs(45 - i, 12.0 + 8.0 * ((i as f64) / 7.0).sin()))
            .collect();
        let a = water_temperature(&history, &obs(0, 12.0), &morphology);
        let b = water_temperature(&history, &obs(0, 12.0), &morphology);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
