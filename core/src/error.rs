use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid agent config: {reason}")]
    InvalidAgentConfig { reason: String },

    #[error("Invalid field size: {width} x {height}")]
    InvalidField { width: f64, height: f64 },

    #[error("Invalid tuning: {reason}")]
    InvalidTuning { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
