//! Continuous distribution tails for converting test statistics to p-values

pub mod chi;
pub mod special;
pub mod t;

pub use chi::{chi_square_cdf, upper_tail_p};
pub use t::{t_cdf, two_tailed_p};
