use thiserror::Error;

/// Application-level error type.
/// Synthesizers and the assignment engine raise only on invalid input;
/// recoverable external failures (LLM, rendering) are handled per item by the
/// pipeline and never swallowed inside the core algorithms.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Empty generation result: {0}")]
    EmptyGeneration(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
