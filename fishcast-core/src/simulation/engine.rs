use crate::{
    error::EngineError,
    models::{light, morphology, oxygen, thermal, turbidity, waves},
    simulation::state::BioContext,
    species,
};
use chrono::{DateTime, Duration, Utc};
use fishcast_schemas::{
    hydrology::FlowHints,
    morphology::MorphologyConfig,
    snapshot::{CalculationMode, EnvironmentalSnapshot, HydroBlock, SnapshotMetadata, WeatherBlock},
    species::Species,
    weather::WeatherObservation,
};
use std::collections::BTreeMap;

/// Presentation precision for temperatures and indices: one decimal.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A single scoring invocation, assembled by `SimulationBuilder`.
///
/// `run` is a pure function of the fields below: no I/O, no shared state,
/// bit-for-bit reproducible. Callers scoring many water bodies may run
/// simulations in parallel freely.
pub struct BioSimulation {
    pub(super) current_weather: WeatherObservation,
    pub(super) history: Vec<WeatherObservation>,
    pub(super) morphology: MorphologyConfig,
    pub(super) flow_hints: FlowHints,
    pub(super) observation_time: DateTime<Utc>,
}

impl BioSimulation {
    /// Runs every sub-model in dependency order and assembles the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NonFiniteResult` if any upstream model emits a
    /// NaN or infinity; a non-finite quantity must surface as a computation
    /// error instead of being serialized into a score.
    pub fn run(&self) -> Result<EnvironmentalSnapshot, EngineError> {
        let resolved = morphology::resolve(&self.morphology);

        let water_temperature_c =
            thermal::water_temperature(&self.history, &self.current_weather, &resolved);
        let turbidity_ntu =
            turbidity::turbidity(&self.history, resolved.basin_turbidity_baseline_ntu);
        let dissolved_oxygen_mg_l =
            oxygen::dissolved_oxygen(water_temperature_c, self.current_weather.pressure_hpa);
        let wave_height_cm = waves::wave_height_cm(
            self.current_weather.wind_speed_kmh,
            resolved.surface_area_m2,
            resolved.shape_factor,
        );
        let pressure_trend_3h_hpa = self.pressure_trend_3h();

        check_finite("water_temperature", water_temperature_c)?;
        check_finite("turbidity", turbidity_ntu)?;
        check_finite("dissolved_oxygen", dissolved_oxygen_mg_l)?;
        check_finite("wave_height", wave_height_cm)?;
        check_finite("pressure_trend", pressure_trend_3h_hpa)?;

        let context = BioContext {
            water_temperature_c,
            cloud_cover_percent: self.current_weather.cloud_cover_percent,
            wind_speed_kmh: self.current_weather.wind_speed_kmh,
            pressure_trend_3h_hpa,
            turbidity_ntu,
            dissolved_oxygen_mg_l,
            wave_height_cm,
            observed_at: self.observation_time,
        };

        let illuminance = light::illuminance_index(
            self.observation_time,
            self.current_weather.cloud_cover_percent,
        );
        let crepuscular = light::crepuscular_multiplier(self.observation_time);
        let oxygen_factor = oxygen::activity_factor(dissolved_oxygen_mg_l);
        check_finite("illuminance", illuminance)?;
        check_finite("crepuscular", crepuscular)?;
        check_finite("oxygen_factor", oxygen_factor)?;

        let mut scores = BTreeMap::new();
        for sp in Species::ALL {
            scores.insert(
                sp,
                species::score(sp, &context, illuminance, oxygen_factor, crepuscular),
            );
        }

        Ok(EnvironmentalSnapshot {
            weather: WeatherBlock {
                air_temperature_c: round1(self.current_weather.air_temperature_c),
                precipitation_mm: round1(self.current_weather.precipitation_mm),
                wind_speed_kmh: round1(self.current_weather.wind_speed_kmh),
                cloud_cover_percent: round1(self.current_weather.cloud_cover_percent),
                pressure_hpa: round1(self.current_weather.pressure_hpa),
                pressure_trend_3h_hpa: round1(pressure_trend_3h_hpa),
            },
            hydro: HydroBlock {
                water_temperature_c: round1(water_temperature_c),
                turbidity_ntu: round1(turbidity_ntu),
                dissolved_oxygen_mg_l: round1(dissolved_oxygen_mg_l),
                wave_height_cm: round1(wave_height_cm),
                flow_m3_s: self.flow_hints.flow_m3_s,
                water_level_m: self.flow_hints.water_level_m,
            },
            scores,
            metadata: SnapshotMetadata {
                // The observation time rather than the wall clock, so
                // identical inputs give bit-identical snapshots.
                calculated_at: self.observation_time,
                mode: CalculationMode::Modeled,
            },
        })
    }

    /// Barometric trend: current pressure minus the newest history sample
    /// at least 3 h older than the observation. 0.0 when the history holds
    /// no sample that old.
    fn pressure_trend_3h(&self) -> f64 {
        let cutoff = self.observation_time - Duration::hours(3);
        self.history
            .iter()
            .rev()
            .find(|obs| obs.timestamp <= cutoff)
            .map(|obs| self.current_weather.pressure_hpa - obs.pressure_hpa)
            .unwrap_or(0.0)
    }
}

fn check_finite(quantity: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFiniteResult { quantity })
    }
}
