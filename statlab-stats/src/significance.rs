//! Significance threshold and verdict
//!
//! The threshold lives here, outside the test math, so a future
//! caller-supplied level changes nothing in the statistical core.

use serde::Serialize;
use std::fmt;

/// Significance level a p-value is judged against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alpha(f64);

impl Alpha {
    /// The single recognized level today
    pub const DEFAULT: Alpha = Alpha(0.05);

    pub fn value(self) -> f64 {
        self.0
    }

    /// Human-readable level, e.g. "5%"
    pub fn percent_label(self) -> String {
        format!("{:.0}%", self.0 * 100.0)
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Categorical significance verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "Significant")]
    Significant,
    #[serde(rename = "Not significant")]
    NotSignificant,
}

impl Verdict {
    pub fn from_p_value(p_value: f64, alpha: Alpha) -> Self {
        if p_value < alpha.value() {
            Verdict::Significant
        } else {
            Verdict::NotSignificant
        }
    }

    pub fn is_significant(self) -> bool {
        self == Verdict::Significant
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Significant => write!(f, "Significant"),
            Verdict::NotSignificant => write!(f, "Not significant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_threshold() {
        let alpha = Alpha::DEFAULT;
        assert_eq!(
            Verdict::from_p_value(0.049, alpha),
            Verdict::Significant
        );
        // Exactly at the threshold is not significant (strict inequality)
        assert_eq!(
            Verdict::from_p_value(0.05, alpha),
            Verdict::NotSignificant
        );
        assert_eq!(Verdict::from_p_value(0.9, alpha), Verdict::NotSignificant);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(Alpha::DEFAULT.percent_label(), "5%");
    }

    #[test]
    fn test_verdict_serializes_as_string() {
        let json = serde_json::to_string(&Verdict::NotSignificant).unwrap();
        assert_eq!(json, "\"Not significant\"");
    }
}
