//! Pearson correlation analysis over paired sequences

use crate::distributions::two_tailed_p;
use crate::helpers::mean;
use crate::significance::{Alpha, Verdict};
use serde::Serialize;
use statlab_core::{PairedSequence, StatError};

/// Pearson correlation test result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PearsonCorrelation {
    pub n: usize,
    pub correlation_coefficient: f64,
    pub p_value: f64,
    pub r_squared: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub significance: Verdict,
    pub interpretation: String,
}

/// Correlate the two dimensions of a paired sequence and test the
/// coefficient against zero with `t = r·sqrt((n − 2)/(1 − r²))`.
pub fn pearson_correlation(
    pairs: &PairedSequence,
    alpha: Alpha,
) -> Result<PearsonCorrelation, StatError> {
    let n = pairs.len();
    if n < 3 {
        return Err(StatError::InsufficientPairs { got: n });
    }

    let xs = pairs.x();
    let ys = pairs.y();
    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(StatError::ZeroVarianceDimension { dimension: "X" });
    }
    if syy == 0.0 {
        return Err(StatError::ZeroVarianceDimension { dimension: "Y" });
    }

    // Clamp absorbs floating-point drift just past ±1
    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    let degrees_of_freedom = n - 2;

    // |r| = 1 sends the t transform to infinity; the tail is exactly 0
    let denominator = 1.0 - r * r;
    let p_value = if denominator <= f64::EPSILON {
        0.0
    } else {
        let t = r * (degrees_of_freedom as f64 / denominator).sqrt();
        two_tailed_p(t, degrees_of_freedom as f64)?
    };

    let significance = Verdict::from_p_value(p_value, alpha);
    let relationship = if r > 0.0 {
        "a positive"
    } else if r < 0.0 {
        "a negative"
    } else {
        "no"
    };
    let interpretation = format!(
        "There is {} linear relationship between X and Y (r = {:.4}); the correlation {} statistically significant at the {} level.",
        relationship,
        r,
        if significance.is_significant() { "is" } else { "is not" },
        alpha.percent_label(),
    );

    Ok(PearsonCorrelation {
        n,
        correlation_coefficient: r,
        p_value,
        r_squared: r * r,
        mean_x,
        mean_y,
        significance,
        interpretation,
    })
}
