use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum PercentileError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rank {rank} is out of range for a sample of {len} values")]
    OutOfRange { rank: usize, len: usize },
}

impl PercentileError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PercentileError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PercentileError>;
