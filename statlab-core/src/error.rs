//! Structured errors for the statistics engine
//!
//! Every malformed-input condition maps to exactly one variant here, and is
//! detected before any distribution function runs. Errors are values that
//! propagate to the caller; nothing is retried and nothing panics.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const NO_VALID_NUMBERS: &str = "NO_VALID_NUMBERS";
    pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
    pub const CATEGORY_COUNT_MISMATCH: &str = "CATEGORY_COUNT_MISMATCH";
    pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
    pub const INSUFFICIENT_SAMPLE_SIZE: &str = "INSUFFICIENT_SAMPLE_SIZE";
    pub const INSUFFICIENT_PAIRS: &str = "INSUFFICIENT_PAIRS";
    pub const INSUFFICIENT_CATEGORIES: &str = "INSUFFICIENT_CATEGORIES";
    pub const ZERO_VARIANCE: &str = "ZERO_VARIANCE";
    pub const ZERO_VARIANCE_DIMENSION: &str = "ZERO_VARIANCE_DIMENSION";
    pub const INVALID_EXPECTED_FREQUENCY: &str = "INVALID_EXPECTED_FREQUENCY";
    pub const INVALID_DEGREES_OF_FREEDOM: &str = "INVALID_DEGREES_OF_FREEDOM";
}

/// Classified error for every way an engine operation can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("No valid numeric values found in input")]
    NoValidNumbers,

    #[error("Sequences must have equal length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Observed and expected frequencies must have the same number of categories: {observed} vs {expected}")]
    CategoryCountMismatch { observed: usize, expected: usize },

    #[error("At least {min} values are required, got {got}")]
    InsufficientData { min: usize, got: usize },

    #[error("T-test requires a sample of at least 2 values, got {got}")]
    InsufficientSampleSize { got: usize },

    #[error("Correlation requires at least 3 pairs, got {got}")]
    InsufficientPairs { got: usize },

    #[error("Chi-square test requires at least 2 categories, got {got}")]
    InsufficientCategories { got: usize },

    #[error("Sample has zero variance; the standard error is undefined")]
    ZeroVariance,

    #[error("The {dimension} values have zero variance; correlation is undefined")]
    ZeroVarianceDimension { dimension: &'static str },

    #[error("Expected frequency at category {index} must be greater than 0, got {value}")]
    InvalidExpectedFrequency { index: usize, value: f64 },

    #[error("Degrees of freedom must be positive, got {df}")]
    InvalidDegreesOfFreedom { df: f64 },
}

impl StatError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            StatError::EmptyInput => codes::EMPTY_INPUT,
            StatError::NoValidNumbers => codes::NO_VALID_NUMBERS,
            StatError::LengthMismatch { .. } => codes::LENGTH_MISMATCH,
            StatError::CategoryCountMismatch { .. } => codes::CATEGORY_COUNT_MISMATCH,
            StatError::InsufficientData { .. } => codes::INSUFFICIENT_DATA,
            StatError::InsufficientSampleSize { .. } => codes::INSUFFICIENT_SAMPLE_SIZE,
            StatError::InsufficientPairs { .. } => codes::INSUFFICIENT_PAIRS,
            StatError::InsufficientCategories { .. } => codes::INSUFFICIENT_CATEGORIES,
            StatError::ZeroVariance => codes::ZERO_VARIANCE,
            StatError::ZeroVarianceDimension { .. } => codes::ZERO_VARIANCE_DIMENSION,
            StatError::InvalidExpectedFrequency { .. } => codes::INVALID_EXPECTED_FREQUENCY,
            StatError::InvalidDegreesOfFreedom { .. } => codes::INVALID_DEGREES_OF_FREEDOM,
        }
    }

    /// Suggestion for fixing the error, where one exists
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            StatError::EmptyInput => Some("Enter comma-separated numbers"),
            StatError::NoValidNumbers => Some("Check that values are numeric, e.g. 1, 2.5, -3"),
            StatError::LengthMismatch { .. } => {
                Some("Provide the same number of values in both lists")
            }
            StatError::CategoryCountMismatch { .. } => {
                Some("Provide one expected frequency per observed category")
            }
            StatError::InvalidExpectedFrequency { .. } => {
                Some("Expected frequencies must all be positive")
            }
            StatError::ZeroVariance | StatError::ZeroVarianceDimension { .. } => {
                Some("Include at least two distinct values")
            }
            _ => None,
        }
    }
}

impl Serialize for StatError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.suggestion().is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("StatError", fields)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("error", &self.to_string())?;
        if let Some(suggestion) = self.suggestion() {
            state.serialize_field("suggestion", suggestion)?;
        }
        state.end()
    }
}
