//! Suspended-sediment model: an exponentially-decaying relaxation toward
//! the basin baseline, perturbed by rainfall impulses.
//!
//! Like the thermal model this is a path-dependent recurrence; it must
//! iterate the history in chronological order.

use fishcast_schemas::weather::WeatherObservation;

/// Fraction of the excess over baseline that settles/dilutes per step.
const DECAY_RATE: f64 = 0.06;
/// Rainfall below this is trace and stirs up no sediment, in mm.
const TRACE_RAIN_MM: f64 = 0.1;
/// NTU added per mm of rainfall above the trace threshold.
const RAIN_SEDIMENT_COEFF: f64 = 1.8;

/// Folds rainfall history into a current turbidity estimate, in NTU.
///
/// Never negative; deliberately has no upper clamp so extreme rain events
/// can produce the very high readings real flood spikes show.
pub fn turbidity(history: &[WeatherObservation], baseline_ntu: f64) -> f64 {
    let mut turbidity = baseline_ntu;
    for obs in history {
        turbidity = baseline_ntu + (turbidity - baseline_ntu) * (1.0 - DECAY_RATE);
        if obs.precipitation_mm > TRACE_RAIN_MM {
            turbidity += obs.precipitation_mm * RAIN_SEDIMENT_COEFF;
        }
    }
    turbidity.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn obs(days_ago: i64, rain_mm: f64) -> WeatherObservation {
        WeatherObservation {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::days(days_ago),
            air_temperature_c: 15.0,
            precipitation_mm: rain_mm,
            wind_speed_kmh: 0.0,
            cloud_cover_percent: 50.0,
            pressure_hpa: 1013.25,
        }
    }

    #[test]
    fn dry_history_stays_at_baseline() {
        let history: Vec<_> = (0..30).map(|i| obs(30 - i, 0.0)).collect();
        let ntu = turbidity(&history, 12.0);
        assert!((ntu - 12.0).abs() < 1e-9);
    }

    #[test]
    fn rain_spike_raises_turbidity_above_baseline() {
        let mut history: Vec<_> = (0..30).map(|i| obs(30 - i, 0.0)).collect();
        history.last_mut().unwrap().precipitation_mm = 80.0;
        let spiked = turbidity(&history, 12.0);
        let calm = turbidity(&history[..29], 12.0);
        assert!(spiked > calm, "80mm spike must raise turbidity: {spiked} vs {calm}");
        assert!(spiked > 100.0, "flood spike should not be clamped: {spiked}");
    }

    #[test]
    fn trace_rain_is_ignored() {
        let history: Vec<_> = (0..10).map(|i| obs(10 - i, 0.05)).collect();
        let ntu = turbidity(&history, 6.0);
        assert!((ntu - 6.0).abs() < 1e-9);
    }

    #[test]
    fn old_spikes_decay_toward_baseline() {
        let mut history: Vec<_> = (0..60).map(|i| obs(60 - i, 0.0)).collect();
        history[5].precipitation_mm = 40.0;
        let ntu = turbidity(&history, 8.5);
        // 54 decay steps later the spike has nearly settled out.
        assert!(ntu < 12.0, "old spike should have decayed: {ntu}");
        assert!(ntu >= 8.5);
    }

    #[test]
    fn never_negative() {
        let history: Vec<_> = (0..5).map(|i| obs(5 - i, 0.0)).collect();
        assert!(turbidity(&history, 0.0) >= 0.0);
    }
}
