//! Student's t distribution tail functions

use crate::distributions::special::regularized_incomplete_beta;
use statlab_core::StatError;

/// Student's t CDF: P(T ≤ t) with df degrees of freedom
pub fn t_cdf(t: f64, df: f64) -> Result<f64, StatError> {
    if df <= 0.0 {
        return Err(StatError::InvalidDegreesOfFreedom { df });
    }

    let x = df / (df + t * t);
    let tail = 0.5 * regularized_incomplete_beta(df / 2.0, 0.5, x);

    Ok(if t >= 0.0 { 1.0 - tail } else { tail })
}

/// Two-tailed p-value for a t statistic: 2 · P(T ≤ -|t|), clamped to [0, 1]
pub fn two_tailed_p(t: f64, df: f64) -> Result<f64, StatError> {
    if df <= 0.0 {
        return Err(StatError::InvalidDegreesOfFreedom { df });
    }

    // 2 · P(T ≤ -|t|) collapses to I_x(df/2, 1/2) with x = df/(df + t²)
    let x = df / (df + t * t);
    let p = regularized_incomplete_beta(df / 2.0, 0.5, x);
    Ok(p.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_at_zero_is_half() {
        for df in [1.0, 5.0, 30.0, 200.0] {
            let v = t_cdf(0.0, df).unwrap();
            assert!((v - 0.5).abs() < 1e-12, "df={}: {}", df, v);
        }
    }

    #[test]
    fn test_cdf_symmetry() {
        let upper = t_cdf(1.7, 12.0).unwrap();
        let lower = t_cdf(-1.7, 12.0).unwrap();
        assert!((upper + lower - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_near_normal_for_large_df() {
        // Φ(1.96) ≈ 0.975 and t converges to normal as df grows
        let v = t_cdf(1.96, 1000.0).unwrap();
        assert!((v - 0.975).abs() < 1e-3, "{}", v);
    }

    #[test]
    fn test_cdf_cauchy_case() {
        // df = 1 is the Cauchy distribution: F(1) = 3/4
        let v = t_cdf(1.0, 1.0).unwrap();
        assert!((v - 0.75).abs() < 1e-10, "{}", v);
    }

    #[test]
    fn test_two_tailed_known_critical_value() {
        // t = 2.228 is the two-tailed 5% critical value at df = 10
        let p = two_tailed_p(2.228, 10.0).unwrap();
        assert!((p - 0.05).abs() < 1e-3, "{}", p);
    }

    #[test]
    fn test_two_tailed_zero_statistic() {
        let p = two_tailed_p(0.0, 7.0).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_tailed_in_unit_interval() {
        for t in [-50.0, -2.0, 0.0, 0.5, 3.0, 120.0] {
            for df in [1.0, 2.0, 10.0, 100.0, 300.0] {
                let p = two_tailed_p(t, df).unwrap();
                assert!((0.0..=1.0).contains(&p), "t={} df={}: {}", t, df, p);
            }
        }
    }

    #[test]
    fn test_invalid_df() {
        assert_eq!(
            t_cdf(1.0, 0.0),
            Err(StatError::InvalidDegreesOfFreedom { df: 0.0 })
        );
        assert_eq!(
            two_tailed_p(1.0, -3.0),
            Err(StatError::InvalidDegreesOfFreedom { df: -3.0 })
        );
    }
}
