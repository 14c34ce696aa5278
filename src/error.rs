//! Error types for the street houses parser

#[cfg(feature = "python")]
use pyo3::exceptions::{PyTypeError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the street houses parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HousesError {
    #[error("Invalid source: expected a string, got {0}")]
    InvalidSource(String),

    #[error("No house information in: {0}")]
    NoHouseInformation(String),

    #[error("House number must be a string, got {0}")]
    NotAString(String),

    #[error("Malformed house number: {0}")]
    MalformedNumber(String),

    #[error("House number is not an integer: {0}")]
    NotAnInteger(String),
}

impl HousesError {
    /// True for errors caused by a non-string argument
    pub fn is_input_type(&self) -> bool {
        matches!(self, HousesError::InvalidSource(_) | HousesError::NotAString(_))
    }
}

#[cfg(feature = "python")]
impl From<HousesError> for PyErr {
    fn from(err: HousesError) -> PyErr {
        if err.is_input_type() {
            PyTypeError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Result type alias for the street houses parser
pub type Result<T> = std::result::Result<T, HousesError>;
