use crate::error::EngineError;
use csv::Writer;
use fishcast_schemas::{snapshot::EnvironmentalSnapshot, species::Species};
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
struct LogEntry {
    calculated_at: String,
    air_temperature_c: f64,
    pressure_hpa: f64,
    pressure_trend_3h_hpa: f64,
    wind_speed_kmh: f64,
    cloud_cover_percent: f64,
    water_temperature_c: f64,
    turbidity_ntu: f64,
    dissolved_oxygen_mg_l: f64,
    wave_height_cm: f64,
    walleye: u8,
    pike: u8,
    perch: u8,
    bass: u8,
}

/// Writes computed snapshots to a CSV file, one flattened row per
/// invocation. Opt-in export for sweep runs; the engine itself never
/// performs I/O.
pub struct SnapshotLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl SnapshotLogger {
    pub fn new(path: &str) -> Result<Self, EngineError> {
        let writer = Writer::from_path(path)
            .map_err(|e| EngineError::CsvError(path.to_string(), e))?;
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    pub fn log_snapshot(&mut self, snapshot: &EnvironmentalSnapshot) -> Result<(), EngineError> {
        let score = |sp: Species| snapshot.scores.get(&sp).copied().unwrap_or(0);

        let entry = LogEntry {
            calculated_at: snapshot.metadata.calculated_at.to_rfc3339(),
            air_temperature_c: snapshot.weather.air_temperature_c,
            pressure_hpa: snapshot.weather.pressure_hpa,
            pressure_trend_3h_hpa: snapshot.weather.pressure_trend_3h_hpa,
            wind_speed_kmh: snapshot.weather.wind_speed_kmh,
            cloud_cover_percent: snapshot.weather.cloud_cover_percent,
            water_temperature_c: snapshot.hydro.water_temperature_c,
            turbidity_ntu: snapshot.hydro.turbidity_ntu,
            dissolved_oxygen_mg_l: snapshot.hydro.dissolved_oxygen_mg_l,
            wave_height_cm: snapshot.hydro.wave_height_cm,
            walleye: score(Species::Walleye),
            pike: score(Species::Pike),
            perch: score(Species::Perch),
            bass: score(Species::Bass),
        };

        self.writer
            .serialize(entry)
            .map_err(|e| EngineError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| EngineError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}
