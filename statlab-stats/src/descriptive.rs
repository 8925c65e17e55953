//! Descriptive statistics over one numeric sequence

use crate::helpers::{mean, sample_variance, sorted, sum};
use serde::Serialize;
use statlab_core::NumericSequence;
use std::collections::HashMap;

/// Summary statistics for a sequence.
///
/// `mode` lists every value tied for the highest occurrence count, in
/// ascending order; it is empty when no value repeats (no mode). All
/// fields carry full precision; rounding is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveResult {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

/// Compute summary statistics. Infallible: the sequence invariants
/// (non-empty, finite) cover every precondition.
pub fn describe(sequence: &NumericSequence) -> DescriptiveResult {
    let values = sequence.values();
    let count = values.len();

    let total = sum(values);
    let mean_value = mean(values);

    let ascending = sorted(values);
    let mid = count / 2;
    let median = if count % 2 == 1 {
        ascending[mid]
    } else {
        (ascending[mid - 1] + ascending[mid]) / 2.0
    };

    let variance = sample_variance(values);
    let std_dev = variance.sqrt();

    let min = ascending[0];
    let max = ascending[count - 1];

    DescriptiveResult {
        count,
        sum: total,
        mean: mean_value,
        median,
        mode: mode(values),
        variance,
        std_dev,
        min,
        max,
        range: max - min,
    }
}

/// Values tied for the highest occurrence count, ascending.
/// Empty when every value is unique.
fn mode(values: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
    for &v in values {
        // Normalize -0.0 so it shares a key with 0.0
        let key = (v + 0.0).to_bits();
        let entry = counts.entry(key).or_insert((v, 0));
        entry.1 += 1;
    }

    let max_count = counts.values().map(|&(_, c)| c).max().unwrap_or(0);
    if max_count <= 1 {
        return Vec::new();
    }

    let mut modes: Vec<f64> = counts
        .into_values()
        .filter(|&(_, c)| c == max_count)
        .map(|(v, _)| v)
        .collect();
    modes.sort_by(f64::total_cmp);
    modes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> NumericSequence {
        NumericSequence::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_describe_scenario() {
        let result = describe(&seq(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert_eq!(result.count, 8);
        assert_eq!(result.sum, 40.0);
        assert_eq!(result.mean, 5.0);
        assert_eq!(result.median, 4.5);
        assert_eq!(result.mode, vec![4.0]);
        assert_eq!(result.min, 2.0);
        assert_eq!(result.max, 9.0);
        assert_eq!(result.range, 7.0);
        assert!((result.variance - 32.0 / 7.0).abs() < 1e-12);
        assert!((result.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_count() {
        let result = describe(&seq(&[5.0, 1.0, 3.0]));
        assert_eq!(result.median, 3.0);
    }

    #[test]
    fn test_mode_tie_reports_all() {
        let result = describe(&seq(&[1.0, 1.0, 2.0, 2.0, 3.0]));
        assert_eq!(result.mode, vec![1.0, 2.0]);
    }

    #[test]
    fn test_no_mode_when_all_unique() {
        let result = describe(&seq(&[1.0, 2.0, 3.0]));
        assert!(result.mode.is_empty());
    }

    #[test]
    fn test_single_value() {
        let result = describe(&seq(&[42.0]));
        assert_eq!(result.count, 1);
        assert_eq!(result.median, 42.0);
        assert_eq!(result.variance, 0.0);
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.range, 0.0);
    }

    #[test]
    fn test_mean_median_within_extremes() {
        let result = describe(&seq(&[-3.5, 0.0, 2.0, 8.25, 11.0]));
        assert!(result.min <= result.median && result.median <= result.max);
        assert!(result.min <= result.mean && result.mean <= result.max);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(describe(&seq(&[1.0, 2.0]))).unwrap();
        assert!(json.get("stdDev").is_some());
        assert!(json.get("std_dev").is_none());
    }
}
