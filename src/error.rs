//! Error taxonomy shared by the generators, the evaluator and the simulator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Empty alphabet, zero length/word count, out-of-range model parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The OS entropy source failed. Never retried with a weaker generator.
    #[error("secure entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    /// The heuristic strength oracle could not assess the password.
    #[error("strength oracle unavailable: {0}")]
    OracleUnavailable(String),

    #[error("settings store error: {0}")]
    Store(#[from] std::io::Error),

    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
