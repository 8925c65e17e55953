//! Free-text tokenizer for numeric input
//!
//! Input is comma-separated tokens; tokens are trimmed, empty tokens are
//! discarded, and tokens that fail to parse as a finite number are silently
//! dropped. That drop is the only recoverable condition: blank input and
//! input with no parseable token at all are hard errors.

use crate::{FrequencyTable, NumericSequence, PairedSequence, StatError};

/// Parse a comma-separated blob into the finite numbers it contains
pub fn parse_numbers(raw: &str) -> Result<Vec<f64>, StatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StatError::EmptyInput);
    }

    let values: Vec<f64> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect();

    if values.is_empty() {
        return Err(StatError::NoValidNumbers);
    }
    Ok(values)
}

/// Parse a single numeric sequence
pub fn parse_sequence(raw: &str) -> Result<NumericSequence, StatError> {
    NumericSequence::new(parse_numbers(raw)?)
}

/// Parse "sample values..., population mean": the last token is the
/// hypothesized mean, everything before it the sample.
pub fn parse_sample_with_mean(raw: &str) -> Result<(NumericSequence, f64), StatError> {
    let mut values = parse_numbers(raw)?;
    if values.len() < 2 {
        return Err(StatError::InsufficientData {
            min: 2,
            got: values.len(),
        });
    }
    let population_mean = values.pop().ok_or(StatError::NoValidNumbers)?;
    Ok((NumericSequence::new(values)?, population_mean))
}

/// Parse "x...; y..." into a paired sequence
pub fn parse_paired(raw: &str) -> Result<PairedSequence, StatError> {
    let (x, y) = split_sections(raw)?;
    PairedSequence::new(x, y)
}

/// Parse "observed...; expected..." into a frequency table
pub fn parse_frequency_table(raw: &str) -> Result<FrequencyTable, StatError> {
    let (observed, expected) = split_sections(raw)?;
    FrequencyTable::new(observed, expected)
}

/// Split semicolon-separated dual-list input into two parsed number lists.
/// A missing second section parses as empty text and fails accordingly.
fn split_sections(raw: &str) -> Result<(Vec<f64>, Vec<f64>), StatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StatError::EmptyInput);
    }
    let mut sections = trimmed.splitn(2, ';');
    let first = sections.next().unwrap_or_default();
    let second = sections.next().unwrap_or_default();
    Ok((parse_numbers(first)?, parse_numbers(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_basic() {
        let values = parse_numbers("1, 2.5, -3").unwrap();
        assert_eq!(values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_parse_numbers_drops_bad_tokens() {
        let values = parse_numbers("1, abc, 2, , 3.5, NaN").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.5]);
    }

    #[test]
    fn test_parse_numbers_empty_input() {
        assert_eq!(parse_numbers("   "), Err(StatError::EmptyInput));
    }

    #[test]
    fn test_parse_numbers_nothing_parseable() {
        assert_eq!(parse_numbers("a, b, c"), Err(StatError::NoValidNumbers));
    }

    #[test]
    fn test_parse_sample_with_mean() {
        let (sample, mu0) = parse_sample_with_mean("5, 6, 7, 8, 9, 7").unwrap();
        assert_eq!(sample.values(), &[5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(mu0, 7.0);
    }

    #[test]
    fn test_parse_sample_with_mean_too_few() {
        assert_eq!(
            parse_sample_with_mean("5"),
            Err(StatError::InsufficientData { min: 2, got: 1 })
        );
    }

    #[test]
    fn test_parse_paired() {
        let pairs = parse_paired("1, 2, 3; 4, 5, 6").unwrap();
        assert_eq!(pairs.x(), &[1.0, 2.0, 3.0]);
        assert_eq!(pairs.y(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_parse_paired_missing_second_list() {
        assert_eq!(parse_paired("1, 2, 3"), Err(StatError::EmptyInput));
    }

    #[test]
    fn test_parse_frequency_table() {
        let table = parse_frequency_table("10, 20, 30; 20, 20, 20").unwrap();
        assert_eq!(table.observed(), &[10.0, 20.0, 30.0]);
        assert_eq!(table.expected(), &[20.0, 20.0, 20.0]);
        assert_eq!(table.categories(), 3);
    }

    #[test]
    fn test_parse_frequency_table_zero_expected() {
        let err = parse_frequency_table("10, 20; 20, 0").unwrap_err();
        assert_eq!(
            err,
            StatError::InvalidExpectedFrequency {
                index: 1,
                value: 0.0
            }
        );
    }
}
