//! Formula argument extraction
//!
//! Formulas take up to three numeric inputs. Missing trailing inputs and
//! explicit nulls default to zero. A one-element array, the shape of a
//! label, counts as its single value.

use crate::{AixiError, Value};
use thiserror::Error;

/// Number of inputs every attribution formula accepts
pub const MAX_INPUTS: usize = 3;

const INPUT_NAMES: [&str; MAX_INPUTS] = ["x1", "x2", "x3"];

/// Error type for argument extraction
#[derive(Debug, Clone, Error)]
pub enum ArgError {
    #[error("{func}() takes at most {max} arguments, got {got}")]
    TooMany { func: &'static str, max: usize, got: usize },

    #[error("{func}() argument '{arg}' is not numeric: {got}")]
    NotNumeric { func: &'static str, arg: &'static str, got: &'static str },

    #[error("{0}")]
    Upstream(AixiError),
}

/// Extract one input, defaulting to zero
pub fn extract_input(value: Option<&Value>, func: &'static str, arg: &'static str) -> Result<f64, ArgError> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => Ok(*n),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(Value::Array(a)) if a.len() == 1 => Ok(a[0] as f64),
        Some(Value::Error(e)) => Err(ArgError::Upstream(e.clone())),
        Some(other) => Err(ArgError::NotNumeric { func, arg, got: other.type_name() }),
    }
}

/// Extract `(x1, x2, x3)` from a formula's argument list
pub fn extract_inputs(args: &[Value], func: &'static str) -> Result<[f64; MAX_INPUTS], ArgError> {
    if args.len() > MAX_INPUTS {
        return Err(ArgError::TooMany { func, max: MAX_INPUTS, got: args.len() });
    }

    let mut inputs = [0.0; MAX_INPUTS];
    for (i, name) in INPUT_NAMES.iter().enumerate() {
        inputs[i] = extract_input(args.get(i), func, *name)?;
    }
    Ok(inputs)
}
