//! Statlab Core - Fundamental types
//!
//! This crate provides the types shared by the Statlab engine:
//! - `NumericSequence`, `PairedSequence`, `FrequencyTable`: validated inputs
//! - `StatError`: structured, classified errors
//! - `parse`: free-text tokenizer producing the validated types

mod error;
mod sequence;

pub mod parse;

pub use error::{codes, StatError};
pub use sequence::{FrequencyTable, NumericSequence, PairedSequence};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{codes, StatError};
    pub use crate::sequence::{FrequencyTable, NumericSequence, PairedSequence};
}
