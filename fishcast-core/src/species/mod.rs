//! Species activity scorers.
//!
//! One generic scorer parameterized by a per-species record: a closed
//! variant dispatch over the fixed species set instead of string-keyed
//! lookups. Species differ only in their parameters and emphasis, not in
//! structure. The numeric thresholds are calibrated values from the
//! behavioral literature; keep them as documented rather than tuning them.

use crate::simulation::state::BioContext;
use fishcast_schemas::species::Species;

/// How a species responds to ambient light, beyond reaction distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightPreference {
    /// More active in dim water (walleye-type).
    LowLight,
    /// Indifferent; the reaction-distance term carries the optics.
    Saturating,
    /// Best in a mid illuminance band (perch-type).
    MidBand,
    /// Mildly avoids bright conditions (bass-type).
    BrightShy,
}

/// Barometric-trend sensitivity. Trend is hPa over the last ~3 h,
/// positive when rising.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressureResponse {
    /// Nearly indifferent to pressure swings.
    Stable,
    /// Linearly penalized by rising pressure.
    RisingPenalized,
    /// Moderate penalty on any swing.
    Moderate,
    /// Sudden rises strongly suppress activity, worse under bright light
    /// ("post-front lockjaw").
    PostFrontLockjaw,
}

/// Per-species scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerParams {
    pub optimal_temp_c: f64,
    pub temp_sigma_c: f64,
    /// Water above this forces the score to exactly 0 (thermal-stress
    /// avoidance, not merely unfavorable).
    pub thermal_ceiling_c: Option<f64>,
    /// Maximum reaction distance in clear, bright water, in meters.
    pub rd_max_m: f64,
    /// Half-saturation constant of the light response.
    pub k_light: f64,
    /// Optical attenuation per NTU of turbidity.
    pub k_turbidity: f64,
    pub light_preference: LightPreference,
    pub pressure_response: PressureResponse,
}

const WALLEYE: ScorerParams = ScorerParams {
    optimal_temp_c: 16.0,
    temp_sigma_c: 6.0,
    thermal_ceiling_c: None,
    rd_max_m: 1.5,
    k_light: 0.08,
    k_turbidity: 0.015,
    light_preference: LightPreference::LowLight,
    pressure_response: PressureResponse::Stable,
};

const PIKE: ScorerParams = ScorerParams {
    optimal_temp_c: 12.0,
    temp_sigma_c: 5.0,
    thermal_ceiling_c: Some(22.0),
    rd_max_m: 4.0,
    k_light: 0.15,
    k_turbidity: 0.06,
    light_preference: LightPreference::Saturating,
    pressure_response: PressureResponse::RisingPenalized,
};

const PERCH: ScorerParams = ScorerParams {
    optimal_temp_c: 18.0,
    temp_sigma_c: 8.0,
    thermal_ceiling_c: None,
    rd_max_m: 2.0,
    k_light: 0.25,
    k_turbidity: 0.04,
    light_preference: LightPreference::MidBand,
    pressure_response: PressureResponse::Moderate,
};

const BASS: ScorerParams = ScorerParams {
    optimal_temp_c: 24.0,
    temp_sigma_c: 5.0,
    thermal_ceiling_c: None,
    rd_max_m: 2.5,
    k_light: 0.2,
    k_turbidity: 0.03,
    light_preference: LightPreference::BrightShy,
    pressure_response: PressureResponse::PostFrontLockjaw,
};

pub fn params(species: Species) -> &'static ScorerParams {
    match species {
        Species::Walleye => &WALLEYE,
        Species::Pike => &PIKE,
        Species::Perch => &PERCH,
        Species::Bass => &BASS,
    }
}

/// Reaction distance: saturating light response times exponential optical
/// attenuation by turbidity, in meters. Shared by every species.
pub fn reaction_distance_m(params: &ScorerParams, illuminance: f64, turbidity_ntu: f64) -> f64 {
    params.rd_max_m * (illuminance / (params.k_light + illuminance))
        * (-params.k_turbidity * turbidity_ntu).exp()
}

/// Gaussian preference around the species' thermal optimum, in [0, 1].
fn temperature_factor(params: &ScorerParams, water_temp_c: f64) -> f64 {
    let d = water_temp_c - params.optimal_temp_c;
    (-d * d / (2.0 * params.temp_sigma_c * params.temp_sigma_c)).exp()
}

fn light_factor(preference: LightPreference, illuminance: f64) -> f64 {
    match preference {
        LightPreference::LowLight => (1.15 - 0.45 * illuminance).clamp(0.0, 1.0),
        LightPreference::Saturating => 1.0,
        LightPreference::MidBand => {
            let d = illuminance - 0.45;
            (-d * d / (2.0 * 0.3 * 0.3)).exp()
        }
        LightPreference::BrightShy => 1.0 - 0.25 * (illuminance - 0.6).max(0.0),
    }
}

fn pressure_factor(response: PressureResponse, trend_3h_hpa: f64, illuminance: f64) -> f64 {
    match response {
        PressureResponse::Stable => (1.0 - 0.02 * trend_3h_hpa.abs()).clamp(0.85, 1.0),
        PressureResponse::RisingPenalized => {
            if trend_3h_hpa > 0.0 {
                (1.0 - 0.08 * trend_3h_hpa).clamp(0.3, 1.0)
            } else {
                1.0
            }
        }
        PressureResponse::Moderate => (1.0 - 0.04 * trend_3h_hpa.abs()).clamp(0.6, 1.0),
        PressureResponse::PostFrontLockjaw => {
            // A fast post-frontal rise shuts feeding down, and bright skies
            // on top of it make it worse.
            if trend_3h_hpa > 3.0 {
                if illuminance > 0.6 {
                    0.2
                } else {
                    0.35
                }
            } else if trend_3h_hpa > 0.0 {
                1.0 - 0.05 * trend_3h_hpa
            } else {
                1.0
            }
        }
    }
}

/// Scores one species against the assembled context, returning an integer
/// in [0, 100].
pub fn score(
    species: Species,
    ctx: &BioContext,
    illuminance: f64,
    oxygen_factor: f64,
    crepuscular: f64,
) -> u8 {
    let params = params(species);

    if let Some(ceiling) = params.thermal_ceiling_c {
        if ctx.water_temperature_c > ceiling {
            return 0;
        }
    }

    let visibility = reaction_distance_m(params, illuminance, ctx.turbidity_ntu) / params.rd_max_m;
    let raw = temperature_factor(params, ctx.water_temperature_c)
        * visibility
        * light_factor(params.light_preference, illuminance)
        * pressure_factor(params.pressure_response, ctx.pressure_trend_3h_hpa, illuminance)
        * oxygen_factor
        * crepuscular;

    (raw * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fishcast_schemas::species::Species;

    fn ctx(water_temp_c: f64, turbidity_ntu: f64, trend: f64) -> BioContext {
        BioContext {
            water_temperature_c: water_temp_c,
            cloud_cover_percent: 20.0,
            wind_speed_kmh: 10.0,
            pressure_trend_3h_hpa: trend,
            turbidity_ntu,
            dissolved_oxygen_mg_l: 9.0,
            wave_height_cm: 3.0,
            observed_at: Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn pike_hard_cutoff_above_thermal_ceiling() {
        // Best-case everything else: cutoff must still force zero.
        let hot = ctx(22.1, 0.0, -2.0);
        assert_eq!(score(Species::Pike, &hot, 0.8, 1.0, 1.4), 0);
        let warm = ctx(21.9, 0.0, -2.0);
        assert!(score(Species::Pike, &warm, 0.8, 1.0, 1.4) > 0);
    }

    #[test]
    fn scores_bounded_for_extreme_inputs() {
        for species in Species::ALL {
            for temp in [-5.0, 0.0, 15.0, 35.0, 80.0] {
                for turb in [0.0, 12.0, 500.0] {
                    for trend in [-20.0, 0.0, 20.0] {
                        let s = score(species, &ctx(temp, turb, trend), 0.5, 0.5, 1.2);
                        assert!(s <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn visibility_is_non_increasing_in_turbidity() {
        for species in Species::ALL {
            let p = params(species);
            let mut last = f64::INFINITY;
            for turb in [0.0, 5.0, 12.0, 40.0, 200.0] {
                let rd = reaction_distance_m(p, 0.6, turb);
                assert!(rd <= last, "{species:?} rd rose with turbidity");
                last = rd;
            }
        }
    }

    #[test]
    fn walleye_prefers_dim_water() {
        let c = ctx(16.0, 8.0, 0.0);
        assert!(score(Species::Walleye, &c, 0.15, 1.0, 1.0) > 0);
        // The low-light preference term must fall as light rises; the
        // reaction-distance term pulls the other way.
        assert!(
            light_factor(LightPreference::LowLight, 0.15)
                > light_factor(LightPreference::LowLight, 1.0)
        );
    }

    #[test]
    fn bass_lockjaw_after_a_pressure_spike() {
        let calm = ctx(24.0, 5.0, 0.0);
        let front = ctx(24.0, 5.0, 6.0);
        let bright = 0.8;
        let dim = 0.3;
        let calm_score = score(Species::Bass, &calm, bright, 1.0, 1.0);
        let front_bright = score(Species::Bass, &front, bright, 1.0, 1.0);
        let front_dim = score(Species::Bass, &front, dim, 1.0, 1.0);
        assert!(front_bright < calm_score);
        // Bright light on top of the rise makes the lockjaw worse.
        assert!(front_dim > front_bright);
        assert_eq!(pressure_factor(PressureResponse::PostFrontLockjaw, 6.0, bright), 0.2);
        assert_eq!(pressure_factor(PressureResponse::PostFrontLockjaw, 6.0, dim), 0.35);
    }

    #[test]
    fn pike_penalized_only_by_rising_pressure() {
        assert_eq!(pressure_factor(PressureResponse::RisingPenalized, -5.0, 0.5), 1.0);
        let rising = pressure_factor(PressureResponse::RisingPenalized, 5.0, 0.5);
        assert!((rising - 0.6).abs() < 1e-12);
        // Deep crashes clamp at the floor instead of going negative.
        assert_eq!(pressure_factor(PressureResponse::RisingPenalized, 50.0, 0.5), 0.3);
    }

    #[test]
    fn perch_peaks_in_a_mid_light_band() {
        let low = light_factor(LightPreference::MidBand, 0.05);
        let mid = light_factor(LightPreference::MidBand, 0.45);
        let high = light_factor(LightPreference::MidBand, 1.0);
        assert!(mid > low && mid > high);
        assert!((mid - 1.0).abs() < 1e-12);
    }
}
