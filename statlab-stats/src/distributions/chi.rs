//! Chi-square distribution tail functions

use crate::distributions::special::regularized_lower_gamma;
use statlab_core::StatError;

/// Chi-square CDF: P(X ≤ x) with df degrees of freedom
pub fn chi_square_cdf(x: f64, df: f64) -> Result<f64, StatError> {
    if df <= 0.0 {
        return Err(StatError::InvalidDegreesOfFreedom { df });
    }
    if x <= 0.0 {
        return Ok(0.0);
    }

    Ok(regularized_lower_gamma(df / 2.0, x / 2.0).clamp(0.0, 1.0))
}

/// Upper-tail p-value for a goodness-of-fit statistic: 1 − CDF(x; df)
pub fn upper_tail_p(statistic: f64, df: f64) -> Result<f64, StatError> {
    Ok((1.0 - chi_square_cdf(statistic, df)?).clamp(0.0, 1.0))
}
