//! Error types shared by the calculator library and binaries

use crate::input::Rejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The input source ran dry while a value was still required
    #[error("Input ended while waiting for: {prompt}")]
    EndOfInput { prompt: String },

    #[error("Invalid {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: Rejection,
    },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
