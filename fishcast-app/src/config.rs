use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fishcast_schemas::{
    hydrology::FlowHints, morphology::MorphologyConfig, weather::WeatherObservation,
};
use serde::Deserialize;
use std::fs;

/// One scoring scenario loaded from a YAML file: the water body, its
/// weather history in chronological order, the current observation, and
/// the moment to score.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub morphology: MorphologyConfig,
    #[serde(default)]
    pub flow_hints: Option<FlowHints>,
    pub current_weather: WeatherObservation,
    #[serde(default)]
    pub history: Vec<WeatherObservation>,
    /// Defaults to the current observation's timestamp when omitted.
    #[serde(default)]
    pub observation_time: Option<DateTime<Utc>>,
}

impl Scenario {
    /// Loads a scenario from the given YAML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file '{}'", path))?;
        let scenario: Scenario = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from '{}'", path))?;
        Ok(scenario)
    }
}
