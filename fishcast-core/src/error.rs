use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("A current weather observation is required to build a simulation")]
    MissingCurrentWeather,

    #[error("A water body morphology is required to build a simulation")]
    MissingMorphology,

    #[error("Computed quantity '{quantity}' was not finite; refusing to emit a snapshot")]
    NonFiniteResult { quantity: &'static str },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
