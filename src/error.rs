use std::time::Duration;
use thiserror::Error;

use crate::model::FailureKind;

/// Errors that can occur while asking the inference server for a recipe
#[derive(Error, Debug)]
pub enum RequestError {
    /// The server answered with a status other than 200
    #[error("Ollama returned status {status}: {body}")]
    ServerError { status: u16, body: String },

    /// The server answered 200 but produced no usable text
    #[error("The model returned an empty recipe. Try again or list different ingredients.")]
    EmptyGeneration,

    /// Nothing is listening at the configured address
    #[error("Could not connect to Ollama at {0}. Start it with: ollama serve")]
    ConnectionRefused(String),

    /// The server did not answer in time
    #[error("Ollama did not answer within {0:?}. The model may still be loading, try again.")]
    Timeout(Duration),

    /// Anything else that went wrong during the call
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RequestError {
    /// The flat, user-facing category of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            RequestError::ServerError { .. } => FailureKind::ServerError,
            RequestError::EmptyGeneration => FailureKind::EmptyGeneration,
            RequestError::ConnectionRefused(_) => FailureKind::ConnectionRefused,
            RequestError::Timeout(_) => FailureKind::Timeout,
            RequestError::Unexpected(_) => FailureKind::Unexpected,
        }
    }
}

/// Errors raised while setting the planner up, before any request is sent
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reading user input failed
    #[error("Failed to read input: {0}")]
    InputError(#[from] std::io::Error),
}

impl PlannerError {
    /// A line of input that couldn't be decoded; the reader has moved past it
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PlannerError::InputError(e) if e.kind() == std::io::ErrorKind::InvalidData)
    }
}
