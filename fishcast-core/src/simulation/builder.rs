use crate::{error::EngineError, simulation::engine::BioSimulation};
use chrono::{DateTime, Utc};
use fishcast_schemas::{
    hydrology::FlowHints, morphology::MorphologyConfig, weather::WeatherObservation,
};

/// A fluent builder for constructing a `BioSimulation`.
///
/// The current weather and the water-body morphology are required: an
/// invocation without them is a malformed request and is rejected rather
/// than defaulted, since defaulting them would produce a normal-looking
/// score from no real data. Everything else degrades gracefully — an
/// empty history is legal (the thermal model seeds from the current
/// observation), and flow hints are optional pass-through telemetry.
#[derive(Default)]
pub struct SimulationBuilder {
    current_weather: Option<WeatherObservation>,
    history: Vec<WeatherObservation>,
    morphology: Option<MorphologyConfig>,
    flow_hints: Option<FlowHints>,
    observation_time: Option<DateTime<Utc>>,
}

impl SimulationBuilder {
    /// Creates a new, empty `SimulationBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current weather observation (required).
    pub fn with_current_weather(mut self, observation: WeatherObservation) -> Self {
        self.current_weather = Some(observation);
        self
    }

    /// Sets the weather history, which must be in chronological order.
    pub fn with_history(mut self, history: Vec<WeatherObservation>) -> Self {
        self.history = history;
        self
    }

    /// Sets the water-body morphology (required; its fields may be partial).
    pub fn with_morphology(mut self, morphology: MorphologyConfig) -> Self {
        self.morphology = Some(morphology);
        self
    }

    /// Attaches gauge telemetry to pass through to the snapshot.
    pub fn with_flow_hints(mut self, hints: FlowHints) -> Self {
        self.flow_hints = Some(hints);
        self
    }

    /// Sets the moment being scored; defaults to the current observation's
    /// timestamp.
    pub fn with_observation_time(mut self, at: DateTime<Utc>) -> Self {
        self.observation_time = Some(at);
        self
    }

    /// Consumes the builder and returns a ready-to-run simulation.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissingCurrentWeather` or
    /// `EngineError::MissingMorphology` when a required input is absent.
    pub fn build(self) -> Result<BioSimulation, EngineError> {
        let current_weather = self
            .current_weather
            .ok_or(EngineError::MissingCurrentWeather)?;
        let morphology = self.morphology.ok_or(EngineError::MissingMorphology)?;
        let observation_time = self.observation_time.unwrap_or(current_weather.timestamp);

        Ok(BioSimulation {
            current_weather,
            history: self.history,
            morphology,
            flow_hints: self.flow_hints.unwrap_or_default(),
            observation_time,
        })
    }
}
