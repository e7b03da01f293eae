//! Structured errors
//!
//! Errors never crash the caller. They are values that flow back out of a
//! formula call and say what went wrong and how to fix it.

use crate::ArgError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNDEFINED_FORMULA: &str = "UNDEFINED_FORMULA";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const NOT_DIFFERENTIABLE: &str = "NOT_DIFFERENTIABLE";
}

/// Structured error for formula evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AixiError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Formula the error was raised in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl AixiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            formula: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set formula context
    pub fn in_formula(mut self, name: impl Into<String>) -> Self {
        self.formula = Some(name.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn undefined_formula(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FORMULA, format!("Unknown formula: {}", name))
            .with_suggestion("Use names() to list registered formulas")
    }

    pub fn arg_count(func: &str, max: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() takes at most {} arguments, got {}", func, max, got))
            .with_suggestion(format!("Use help('{}') for usage", func))
            .in_formula(func)
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
            .in_formula(func)
    }

    pub fn not_differentiable(func: &str) -> Self {
        Self::new(codes::NOT_DIFFERENTIABLE, format!("{}() has no gradient", func))
            .in_formula(func)
    }
}

impl std::fmt::Display for AixiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for AixiError {}

impl From<ArgError> for AixiError {
    fn from(err: ArgError) -> Self {
        match err {
            ArgError::TooMany { func, max, got } => Self::arg_count(func, max, got),
            ArgError::NotNumeric { func, arg, got } => Self::arg_type(func, arg, "Number", got),
            ArgError::Upstream(e) => e,
        }
    }
}
