//! AIXI Core - Fundamental types
//!
//! This crate provides the core types shared by the formula crates:
//! - `Value`: Runtime values (numbers, label arrays, objects, errors)
//! - `AixiError`: Structured errors
//! - `Scalar`: Numeric abstraction formulas are written against
//! - `Dual`: Forward-mode dual number for gradients

mod args;
mod dual;
mod error;
mod scalar;
mod value;

pub use args::{extract_input, extract_inputs, ArgError, MAX_INPUTS};
pub use dual::{gradient3, Dual};
pub use error::{AixiError, codes};
pub use scalar::Scalar;
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AixiError, Dual, Scalar, Value};
    pub use crate::error::codes;
}
