//! Surface light model: a normalized illuminance index plus a crepuscular
//! (dawn/dusk) activity multiplier, both from time-of-day, date and cloud
//! cover.
//!
//! Daylight bounds come from a coarse monthly sunrise/sunset lookup for
//! mid-northern latitudes; the seasonal phase matches the thermal model's
//! northern-hemisphere solstice reference.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Approximate sunrise hour (UTC, decimal) per month, January first.
const SUNRISE_H: [f64; 12] = [8.0, 7.5, 6.75, 6.0, 5.5, 5.25, 5.5, 6.0, 6.75, 7.25, 7.75, 8.25];
/// Approximate sunset hour (UTC, decimal) per month, January first.
const SUNSET_H: [f64; 12] = [16.75, 17.5, 18.25, 20.0, 20.75, 21.25, 21.0, 20.25, 19.25, 18.25, 16.75, 16.25];

/// Civil-twilight allowance around the daylight window, in hours.
const TWILIGHT_MARGIN_H: f64 = 0.5;
/// Index floor; never exactly zero so downstream ratios stay defined.
const ILLUMINANCE_FLOOR: f64 = 0.01;

/// Centers of the dawn and dusk activity bumps, decimal hours.
const DAWN_PEAK_H: f64 = 7.5;
const DUSK_PEAK_H: f64 = 19.5;
/// Width of the crepuscular bumps, in hours.
const CREPUSCULAR_SIGMA_H: f64 = 1.5;
/// Peak boost of the crepuscular multiplier above 1.0.
const CREPUSCULAR_BOOST: f64 = 0.4;

fn decimal_hour(at: DateTime<Utc>) -> f64 {
    at.hour() as f64 + at.minute() as f64 / 60.0 + at.second() as f64 / 3600.0
}

/// Normalized illuminance index in [0.01, 1.0].
///
/// Inside the daylight window the index follows a half-sine elevation
/// curve peaking at solar noon, dimmed by `1 - (cloud/100)^3`; heavy
/// overcast dims sharply and non-linearly. Outside daylight (plus a
/// twilight margin) the floor applies.
pub fn illuminance_index(at: DateTime<Utc>, cloud_cover_percent: f64) -> f64 {
    let month_idx = at.month0() as usize;
    let sunrise = SUNRISE_H[month_idx];
    let sunset = SUNSET_H[month_idx];
    let hour = decimal_hour(at);

    if hour < sunrise - TWILIGHT_MARGIN_H || hour > sunset + TWILIGHT_MARGIN_H {
        return ILLUMINANCE_FLOOR;
    }

    let elevation = (std::f64::consts::PI * (hour - sunrise) / (sunset - sunrise))
        .sin()
        .max(0.0);
    let cloud_fraction = (cloud_cover_percent / 100.0).clamp(0.0, 1.0);
    let attenuation = 1.0 - cloud_fraction.powi(3);

    (elevation * attenuation).clamp(ILLUMINANCE_FLOOR, 1.0)
}

/// Dawn/dusk feeding multiplier in [1.0, 1.4]: two Gaussian bumps centered
/// on 07:30 and 19:30.
pub fn crepuscular_multiplier(at: DateTime<Utc>) -> f64 {
    let hour = decimal_hour(at);
    let bump = |center: f64| {
        let d = hour - center;
        (-d * d / (2.0 * CREPUSCULAR_SIGMA_H * CREPUSCULAR_SIGMA_H)).exp()
    };
    1.0 + CREPUSCULAR_BOOST * bump(DAWN_PEAK_H).max(bump(DUSK_PEAK_H))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(month: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, 15, hour, minute, 0).unwrap()
    }

    #[test]
    fn night_is_floored_not_zero() {
        let idx = illuminance_index(at(6, 2, 0), 0.0);
        assert_eq!(idx, 0.01);
    }

    #[test]
    fn clear_noon_is_near_full() {
        let idx = illuminance_index(at(6, 13, 0), 0.0);
        assert!(idx > 0.95, "clear June noon should be bright: {idx}");
    }

    #[test]
    fn cloud_dimming_is_nonlinear() {
        let clear = illuminance_index(at(6, 13, 0), 0.0);
        let half = illuminance_index(at(6, 13, 0), 50.0);
        let overcast = illuminance_index(at(6, 13, 0), 100.0);
        // 50% cloud removes only 12.5% of light; full overcast floors it.
        assert!((half / clear - 0.875).abs() < 1e-9);
        assert_eq!(overcast, 0.01);
    }

    #[test]
    fn index_bounds_hold_across_the_day() {
        for hour in 0..24 {
            for clouds in [0.0, 30.0, 75.0, 100.0] {
                let idx = illuminance_index(at(12, hour, 0), clouds);
                assert!((0.01..=1.0).contains(&idx), "out of bounds: {idx}");
            }
        }
    }

    #[test]
    fn crepuscular_peaks_at_dawn_and_dusk() {
        let dawn = crepuscular_multiplier(at(6, 7, 30));
        let noon = crepuscular_multiplier(at(6, 13, 0));
        let dusk = crepuscular_multiplier(at(6, 19, 30));
        assert!((dawn - 1.4).abs() < 1e-9);
        assert!((dusk - 1.4).abs() < 1e-9);
        assert!(noon < 1.1);
        for hour in 0..24 {
            let m = crepuscular_multiplier(at(6, hour, 0));
            assert!((1.0..=1.4).contains(&m));
        }
    }
}
