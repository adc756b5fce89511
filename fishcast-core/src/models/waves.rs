//! Wind-wave model: a simplified fetch-limited empirical relation of the
//! SMB family. Fetch comes from the configured surface area and shape
//! factor, so rivers and channels legitimately report near-zero chop.

/// Below this wind speed there is no meaningful wave generation, in km/h.
const WIND_THRESHOLD_KMH: f64 = 10.0;
/// Empirical SMB-style height coefficient.
const HEIGHT_COEFF: f64 = 0.0016;
/// Fraction of wind energy mechanically transferred to the water surface.
const TRANSFER_FACTOR: f64 = 0.8;
const GRAVITY_M_S2: f64 = 9.81;

/// Wave height in centimeters for the current wind over the resolved
/// water body.
pub fn wave_height_cm(wind_speed_kmh: f64, surface_area_m2: f64, shape_factor: f64) -> f64 {
    if wind_speed_kmh < WIND_THRESHOLD_KMH {
        return 0.0;
    }
    let wind_m_s = wind_speed_kmh / 3.6;
    let fetch_m = surface_area_m2.sqrt() * shape_factor;
    HEIGHT_COEFF * wind_m_s * (fetch_m / GRAVITY_M_S2).sqrt() * 100.0 * TRANSFER_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_wind_produces_no_chop() {
        assert_eq!(wave_height_cm(5.0, 1_000_000.0, 2.0), 0.0);
        assert_eq!(wave_height_cm(9.99, 1_000_000.0, 2.0), 0.0);
    }

    #[test]
    fn height_grows_with_wind_and_fetch() {
        let small = wave_height_cm(15.0, 50_000.0, 1.0);
        let windier = wave_height_cm(30.0, 50_000.0, 1.0);
        let bigger_lake = wave_height_cm(15.0, 5_000_000.0, 1.0);
        assert!(small > 0.0);
        assert!(windier > small);
        assert!(bigger_lake > small);
    }

    #[test]
    fn known_value() {
        // 15 km/h over a 50_000 m2 body, shape 1.0:
        // 0.0016 * 4.1667 * sqrt(223.6/9.81) * 100 * 0.8 = ~2.55 cm
        let h = wave_height_cm(15.0, 50_000.0, 1.0);
        assert!((h - 2.546).abs() < 0.01, "unexpected height: {h}");
    }
}
