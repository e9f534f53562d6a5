//! Error types for the calculators

use thiserror::Error;

/// Rejection raised at the form validation boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field}: '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} range needs {steps} steps, more than the {max} allowed")]
    TooManySteps { field: &'static str, steps: f64, max: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
