//! Fixed-count histogram binning for visualization

use serde::Serialize;
use statlab_core::NumericSequence;

/// Default number of bins when the caller does not specify one
pub const DEFAULT_BIN_COUNT: usize = 6;

/// One labeled bin: `[start, end)`, except the last bin which closes at the
/// sequence maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Group a sequence into at most `bin_count` bins (reduced to the sequence
/// length when shorter). Every value is counted exactly once: indices are
/// clamped into range so boundary overshoot lands in the edge bins.
pub fn bin(sequence: &NumericSequence, bin_count: usize) -> Vec<HistogramBin> {
    let values = sequence.values();
    let bin_count = bin_count.min(values.len()).max(1);

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // All-identical input would make the bin width zero
    let bin_size = if max == min {
        1.0
    } else {
        (max - min) / bin_count as f64
    };

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let start = min + i as f64 * bin_size;
            let end = if i == bin_count - 1 {
                max
            } else {
                min + (i + 1) as f64 * bin_size
            };
            HistogramBin {
                label: format!("{:.1}–{:.1}", start, end),
                start,
                end,
                count: 0,
            }
        })
        .collect();

    for &value in values {
        let index = (((value - min) / bin_size).floor() as isize)
            .clamp(0, bin_count as isize - 1) as usize;
        bins[index].count += 1;
    }

    bins
}
