//! Plugin traits

use aixi_core::{AixiError, Value};
use serde::Serialize;

/// Metadata about a formula argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, typ, description, optional: true, default: Some(default) }
    }
}

/// Metadata for a formula plugin
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Closed-form expression
    pub formula: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

/// Pure formula plugin
pub trait FormulaPlugin: Send + Sync {
    fn meta(&self) -> FormulaMeta;

    /// Evaluate the formula
    fn call(&self, args: &[Value]) -> Value;

    /// Partial derivatives with respect to each input, as a `List` of `Number`s
    fn gradient(&self, _args: &[Value]) -> Value {
        Value::Error(AixiError::not_differentiable(self.meta().name))
    }
}
