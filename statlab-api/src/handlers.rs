//! Raw-text operations: parse, compute, shape the response
//!
//! One function per request shape of the consumer contract. Each call is
//! independent and side-effect free; failures come back as `StatError`
//! and serialize into `{ code, error }` bodies via `error_body`.

use crate::response::{
    ChiSquareResponse, CorrelationResponse, DescriptiveResponse, HistogramResponse,
    TTestResponse,
};
use serde_json::{json, Value as JsonValue};
use statlab_core::{parse, StatError};
use statlab_stats::{
    bin, chi_square_test, describe, one_sample_t_test, pearson_correlation, Alpha,
    DEFAULT_BIN_COUNT,
};
use tracing::debug;

/// Descriptive statistics over `{ data: "<comma-separated numbers>" }`
pub fn descriptive_stats(raw: &str) -> Result<DescriptiveResponse, StatError> {
    let sequence = parse::parse_sequence(raw)?;
    let result = describe(&sequence);
    let histogram = HistogramResponse::from_bins(bin(&sequence, DEFAULT_BIN_COUNT));
    debug!(count = result.count, "descriptive statistics computed");
    Ok(DescriptiveResponse::new(
        result,
        sequence.values().to_vec(),
        histogram,
    ))
}

/// One-sample t-test over `{ data: "<sample values>, <population mean>" }`
pub fn t_test(raw: &str) -> Result<TTestResponse, StatError> {
    let (sample, population_mean) = parse::parse_sample_with_mean(raw)?;
    let result = one_sample_t_test(&sample, population_mean, Alpha::DEFAULT)?;
    debug!(
        n = result.sample_size,
        p_value = result.p_value,
        "t-test computed"
    );
    Ok(result.into())
}

/// Chi-square goodness-of-fit over `{ data: "<observed...>; <expected...>" }`
pub fn chi_square(raw: &str) -> Result<ChiSquareResponse, StatError> {
    let table = parse::parse_frequency_table(raw)?;
    let result = chi_square_test(&table, Alpha::DEFAULT)?;
    debug!(
        categories = result.categories,
        p_value = result.p_value,
        "chi-square test computed"
    );
    Ok(result.into())
}

/// Pearson correlation over `{ data: "<x...>; <y...>" }`
pub fn correlation(raw: &str) -> Result<CorrelationResponse, StatError> {
    let pairs = parse::parse_paired(raw)?;
    let result = pearson_correlation(&pairs, Alpha::DEFAULT)?;
    debug!(n = result.n, p_value = result.p_value, "correlation computed");
    Ok(result.into())
}

/// Error body for a failed operation, for the transport to send with a
/// non-2xx status
pub fn error_body(error: &StatError) -> JsonValue {
    debug!(code = error.code(), "operation failed");
    json!({
        "code": error.code(),
        "error": error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptive_rounding_applied() {
        let response = descriptive_stats("2, 4, 4, 4, 5, 5, 7, 9").unwrap();
        // Full-precision stddev is 2.13808993..., displayed as 2.1381
        assert_eq!(response.std_dev, 2.1381);
        assert_eq!(response.mode, "4");
    }

    #[test]
    fn test_error_body_shape() {
        let body = error_body(&StatError::EmptyInput);
        assert_eq!(body["code"], "EMPTY_INPUT");
        assert_eq!(body["error"], "Input is empty");
    }
}
