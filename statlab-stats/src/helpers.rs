//! Shared numeric utilities for the calculators
//!
//! Callers pass slices taken from a `NumericSequence`, so elements are
//! finite and slices are non-empty unless noted.

/// Sum of all values
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; caller guarantees a non-empty slice
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Sample variance with the unbiased (n - 1) divisor.
/// A single observation has zero spread by definition.
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    ss / (n - 1) as f64
}

/// Ascending copy of the values
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut copy = values.to_vec();
    copy.sort_by(f64::total_cmp);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_mean() {
        let values = [2.0, 4.0, 6.0];
        assert_eq!(sum(&values), 12.0);
        assert_eq!(mean(&values), 4.0);
    }

    #[test]
    fn test_sample_variance() {
        // Σ(x - 5)² = 32 over 7 degrees of freedom
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let var = sample_variance(&values);
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_single_value() {
        assert_eq!(sample_variance(&[42.0]), 0.0);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }
}
