//! Statlab Statistics Engine
//!
//! Pure, stateless statistical computations over validated sequences:
//! descriptive summaries, histogram binning, t and chi-square distribution
//! tails, and three hypothesis tests. Every operation is a synchronous
//! function from its inputs to a `Result`; there is no shared state and no
//! side effect beyond the returned value.

pub mod bivariate;
pub mod descriptive;
pub mod distributions;
pub mod helpers;
pub mod histogram;
pub mod hypothesis;
pub mod significance;

pub use bivariate::{pearson_correlation, PearsonCorrelation};
pub use descriptive::{describe, DescriptiveResult};
pub use histogram::{bin, HistogramBin, DEFAULT_BIN_COUNT};
pub use hypothesis::{chi_square_test, one_sample_t_test, ChiSquareGoodnessOfFit, OneSampleTTest};
pub use significance::{Alpha, Verdict};
