//! Statlab API boundary
//!
//! The engine's outward surface: each operation takes the raw `data` text
//! of a request and returns a JSON-serializable response with numeric
//! fields rounded to display precision, or a classified `StatError`. The
//! transport that carries these shapes (HTTP handlers, CSV extraction) is
//! the embedding application's concern.

mod handlers;
mod response;

pub use handlers::{chi_square, correlation, descriptive_stats, error_body, t_test};
pub use response::{
    ChiSquareResponse, CorrelationResponse, DescriptiveResponse, HistogramResponse,
    TTestResponse, DISPLAY_PRECISION,
};
