//! Hypothesis tests: one-sample t-test and chi-square goodness-of-fit
//!
//! Each test owns its immutable result struct; degenerate inputs are
//! rejected before any distribution function is evaluated.

use crate::distributions::{two_tailed_p, upper_tail_p};
use crate::helpers::{mean, sample_variance, sum};
use crate::significance::{Alpha, Verdict};
use serde::Serialize;
use statlab_core::{FrequencyTable, NumericSequence, StatError};

/// One-sample t-test result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneSampleTTest {
    pub sample_size: usize,
    pub sample_mean: f64,
    pub population_mean: f64,
    pub sample_std_dev: f64,
    pub standard_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    pub significance: Verdict,
    pub interpretation: String,
}

/// Test whether a sample mean differs from a hypothesized population mean
pub fn one_sample_t_test(
    sample: &NumericSequence,
    population_mean: f64,
    alpha: Alpha,
) -> Result<OneSampleTTest, StatError> {
    let n = sample.len();
    if n < 2 {
        return Err(StatError::InsufficientSampleSize { got: n });
    }

    let values = sample.values();
    let sample_mean = mean(values);
    let sample_std_dev = sample_variance(values).sqrt();
    if sample_std_dev == 0.0 {
        return Err(StatError::ZeroVariance);
    }

    let standard_error = sample_std_dev / (n as f64).sqrt();
    let t_statistic = (sample_mean - population_mean) / standard_error;
    let degrees_of_freedom = n - 1;

    let p_value = two_tailed_p(t_statistic, degrees_of_freedom as f64)?;
    let significance = Verdict::from_p_value(p_value, alpha);

    let direction = if sample_mean > population_mean {
        "greater than"
    } else if sample_mean < population_mean {
        "less than"
    } else {
        "equal to"
    };
    let interpretation = format!(
        "The sample mean ({:.4}) is {} the population mean ({:.4}); the difference {} statistically significant at the {} level.",
        sample_mean,
        direction,
        population_mean,
        if significance.is_significant() { "is" } else { "is not" },
        alpha.percent_label(),
    );

    Ok(OneSampleTTest {
        sample_size: n,
        sample_mean,
        population_mean,
        sample_std_dev,
        standard_error,
        t_statistic,
        p_value,
        degrees_of_freedom,
        significance,
        interpretation,
    })
}

/// Chi-square goodness-of-fit result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChiSquareGoodnessOfFit {
    pub chi_square_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    pub categories: usize,
    pub observed_sum: f64,
    pub expected_sum: f64,
    pub significance: Verdict,
    pub interpretation: String,
}

/// Test whether observed frequencies match the expected distribution
pub fn chi_square_test(
    table: &FrequencyTable,
    alpha: Alpha,
) -> Result<ChiSquareGoodnessOfFit, StatError> {
    let categories = table.categories();
    if categories < 2 {
        return Err(StatError::InsufficientCategories { got: categories });
    }

    // Expected counts are strictly positive by FrequencyTable's invariant
    let chi_square_statistic: f64 = table
        .observed()
        .iter()
        .zip(table.expected())
        .map(|(o, e)| (o - e).powi(2) / e)
        .sum();

    let degrees_of_freedom = categories - 1;
    let p_value = upper_tail_p(chi_square_statistic, degrees_of_freedom as f64)?;
    let significance = Verdict::from_p_value(p_value, alpha);

    let interpretation = format!(
        "The observed frequencies {} from the expected frequencies at the {} level (χ² = {:.4}, df = {}).",
        if significance.is_significant() {
            "differ significantly"
        } else {
            "do not differ significantly"
        },
        alpha.percent_label(),
        chi_square_statistic,
        degrees_of_freedom,
    );

    Ok(ChiSquareGoodnessOfFit {
        chi_square_statistic,
        p_value,
        degrees_of_freedom,
        categories,
        observed_sum: sum(table.observed()),
        expected_sum: sum(table.expected()),
        significance,
        interpretation,
    })
}
