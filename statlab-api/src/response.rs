//! JSON response shapes and display rounding
//!
//! Numeric fields are rounded here, at the presentation boundary only;
//! the engine keeps full precision in every intermediate computation.

use serde::Serialize;
use statlab_stats::{
    ChiSquareGoodnessOfFit, DescriptiveResult, HistogramBin, OneSampleTTest, PearsonCorrelation,
};

/// Decimal places shown to the caller
pub const DISPLAY_PRECISION: u32 = 4;

/// Round a value to display precision
pub(crate) fn round_display(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_PRECISION as i32);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramResponse {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl HistogramResponse {
    pub(crate) fn from_bins(bins: Vec<HistogramBin>) -> Self {
        let (labels, counts) = bins.into_iter().map(|b| (b.label, b.count)).unzip();
        Self { labels, counts }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveResponse {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: String,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Parsed input, passed through for downstream visualization
    pub values: Vec<f64>,
    pub histogram: HistogramResponse,
}

impl DescriptiveResponse {
    pub(crate) fn new(
        result: DescriptiveResult,
        values: Vec<f64>,
        histogram: HistogramResponse,
    ) -> Self {
        Self {
            count: result.count,
            sum: round_display(result.sum),
            mean: round_display(result.mean),
            median: round_display(result.median),
            mode: format_mode(&result.mode),
            variance: round_display(result.variance),
            std_dev: round_display(result.std_dev),
            min: round_display(result.min),
            max: round_display(result.max),
            range: round_display(result.range),
            values,
            histogram,
        }
    }
}

/// Render the mode list: tied values joined, or the no-mode marker
fn format_mode(mode: &[f64]) -> String {
    if mode.is_empty() {
        return "No mode".to_string();
    }
    mode.iter()
        .map(|&v| round_display(v).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TTestResponse {
    pub sample_size: usize,
    pub sample_mean: f64,
    pub population_mean: f64,
    pub sample_std_dev: f64,
    pub standard_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    pub significance: String,
    pub interpretation: String,
}

impl From<OneSampleTTest> for TTestResponse {
    fn from(result: OneSampleTTest) -> Self {
        Self {
            sample_size: result.sample_size,
            sample_mean: round_display(result.sample_mean),
            population_mean: round_display(result.population_mean),
            sample_std_dev: round_display(result.sample_std_dev),
            standard_error: round_display(result.standard_error),
            t_statistic: round_display(result.t_statistic),
            p_value: round_display(result.p_value),
            degrees_of_freedom: result.degrees_of_freedom,
            significance: result.significance.to_string(),
            interpretation: result.interpretation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChiSquareResponse {
    pub chi_square_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    pub categories: usize,
    pub observed_sum: f64,
    pub expected_sum: f64,
    pub significance: String,
    pub interpretation: String,
}

impl From<ChiSquareGoodnessOfFit> for ChiSquareResponse {
    fn from(result: ChiSquareGoodnessOfFit) -> Self {
        Self {
            chi_square_statistic: round_display(result.chi_square_statistic),
            p_value: round_display(result.p_value),
            degrees_of_freedom: result.degrees_of_freedom,
            categories: result.categories,
            observed_sum: round_display(result.observed_sum),
            expected_sum: round_display(result.expected_sum),
            significance: result.significance.to_string(),
            interpretation: result.interpretation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResponse {
    pub n: usize,
    pub correlation_coefficient: f64,
    pub p_value: f64,
    pub r_squared: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub significance: String,
    pub interpretation: String,
}

impl From<PearsonCorrelation> for CorrelationResponse {
    fn from(result: PearsonCorrelation) -> Self {
        Self {
            n: result.n,
            correlation_coefficient: round_display(result.correlation_coefficient),
            p_value: round_display(result.p_value),
            r_squared: round_display(result.r_squared),
            mean_x: round_display(result.mean_x),
            mean_y: round_display(result.mean_y),
            significance: result.significance.to_string(),
            interpretation: result.interpretation,
        }
    }
}
