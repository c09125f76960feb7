use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("Step value [{input}] is not an integer: {source}")]
    InvalidStep {
        input: String,
        source: ParseIntError,
    },
    #[error("Negative threshold {negative} must be below positive threshold {positive}.")]
    OverlappingThresholds { positive: i32, negative: i32 },
    #[error("Counter config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CounterError {
    fn from(err: serde_json::Error) -> Self {
        CounterError::Config(err.to_string())
    }
}
