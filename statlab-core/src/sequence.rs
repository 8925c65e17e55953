//! Validated input types for the statistics engine
//!
//! Constructors enforce the data-model invariants once, so the calculators
//! can assume finite elements and consistent lengths without re-checking.

use crate::StatError;
use serde::Serialize;

/// Ordered sequence of finite real numbers, never empty.
///
/// Non-finite values (NaN, infinities) are dropped at construction; if
/// nothing survives, construction fails with `NoValidNumbers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NumericSequence(Vec<f64>);

impl NumericSequence {
    pub fn new(values: Vec<f64>) -> Result<Self, StatError> {
        let finite: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Err(StatError::NoValidNumbers);
        }
        Ok(Self(finite))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the sequence meets a statistical minimum length
    pub fn require_min(&self, min: usize) -> Result<(), StatError> {
        if self.len() < min {
            return Err(StatError::InsufficientData {
                min,
                got: self.len(),
            });
        }
        Ok(())
    }
}

/// Two equal-length sequences of at least 2 pairs, for bivariate analysis
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSequence {
    x: NumericSequence,
    y: NumericSequence,
}

impl PairedSequence {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, StatError> {
        let x = NumericSequence::new(x)?;
        let y = NumericSequence::new(y)?;
        if x.len() != y.len() {
            return Err(StatError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        x.require_min(2)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        self.x.values()
    }

    pub fn y(&self) -> &[f64] {
        self.y.values()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Observed and expected frequency counts over the same categories.
///
/// Expected counts must be strictly positive; the chi-square statistic
/// divides by them.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    observed: NumericSequence,
    expected: NumericSequence,
}

impl FrequencyTable {
    pub fn new(observed: Vec<f64>, expected: Vec<f64>) -> Result<Self, StatError> {
        let observed = NumericSequence::new(observed)?;
        let expected = NumericSequence::new(expected)?;
        if observed.len() != expected.len() {
            return Err(StatError::CategoryCountMismatch {
                observed: observed.len(),
                expected: expected.len(),
            });
        }
        for (index, &value) in expected.values().iter().enumerate() {
            if value <= 0.0 {
                return Err(StatError::InvalidExpectedFrequency { index, value });
            }
        }
        Ok(Self { observed, expected })
    }

    pub fn observed(&self) -> &[f64] {
        self.observed.values()
    }

    pub fn expected(&self) -> &[f64] {
        self.expected.values()
    }

    pub fn categories(&self) -> usize {
        self.observed.len()
    }
}
