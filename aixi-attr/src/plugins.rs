//! Registry plugins for the attribution formulas

use aixi_core::{extract_inputs, gradient3};
use aixi_plugin::prelude::*;

use crate::formulas;

pub struct Ssin;
pub struct Ssum;
pub struct Discrete;
pub struct Psin;
pub struct Int2;

type Formula<T> = fn(T, T, T) -> T;

static INPUT_ARGS: [ArgMeta; 3] = [
    ArgMeta::optional("x1", "Number", "First feature value", "0"),
    ArgMeta::optional("x2", "Number", "Second feature value", "0"),
    ArgMeta::optional("x3", "Number", "Third feature value", "0"),
];

static DISCRETE_ARGS: [ArgMeta; 3] = [
    ArgMeta::optional("x1", "Number", "First feature value", "0"),
    ArgMeta::optional("x2", "Number", "Second feature value", "0"),
    ArgMeta::optional("x3", "Number", "Accepted and ignored", "0"),
];

static SSIN_EXAMPLES: [&str; 2] = ["ssin(1) -> [0.5]", "ssin(1, 1, 1) -> [0.9166667]"];
static SSIN_RELATED: [&str; 1] = ["ssum"];

static SSUM_EXAMPLES: [&str; 2] = ["ssum(2, 4, 6) -> [3]", "ssum() -> [0]"];
static SSUM_RELATED: [&str; 1] = ["ssin"];

static DISCRETE_EXAMPLES: [&str; 1] = ["discrete(3, 2) -> 2"];

static PSIN_EXAMPLES: [&str; 2] = ["psin() -> [1]", "psin(0.5, 0.25, 1/6) -> [2.8125]"];
static PSIN_RELATED: [&str; 1] = ["ssin"];

static INT2_EXAMPLES: [&str; 2] = ["int2(2, 0, 5) -> [10]", "int2(1, 0.25) -> [1]"];

fn evaluate(args: &[Value], func: &'static str, f: Formula<f64>) -> Result<f64, AixiError> {
    let [x1, x2, x3] = extract_inputs(args, func)?;
    Ok(f(x1, x2, x3))
}

/// Evaluate and wrap as a one-element `f32` array
fn call_label(args: &[Value], func: &'static str, f: Formula<f64>) -> Value {
    match evaluate(args, func, f) {
        Ok(y) => Value::label(y),
        Err(e) => Value::Error(e),
    }
}

fn call_gradient(args: &[Value], func: &'static str, f: Formula<Dual>) -> Value {
    match extract_inputs(args, func) {
        Ok(x) => Value::List(gradient3(f, x).into_iter().map(Value::Number).collect()),
        Err(e) => Value::Error(e.into()),
    }
}

impl FormulaPlugin for Ssin {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "ssin",
            description: "Weighted sum of sines",
            formula: "1/2·sin(π·x1/2) + 1/4·sin(π·x2/2) + 1/6·sin(π·x3/2)",
            usage: "ssin(x1=0, x2=0, x3=0)",
            args: &INPUT_ARGS,
            returns: "Array<f32>[1]",
            examples: &SSIN_EXAMPLES,
            category: "attribution",
            related: &SSIN_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        call_label(args, "ssin", formulas::ssin)
    }

    fn gradient(&self, args: &[Value]) -> Value {
        call_gradient(args, "ssin", formulas::ssin)
    }
}

impl FormulaPlugin for Ssum {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "ssum",
            description: "Weighted linear sum",
            formula: "1/2·x1 + 1/4·x2 + 1/6·x3",
            usage: "ssum(x1=0, x2=0, x3=0)",
            args: &INPUT_ARGS,
            returns: "Array<f32>[1]",
            examples: &SSUM_EXAMPLES,
            category: "attribution",
            related: &SSUM_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        call_label(args, "ssum", formulas::ssum)
    }

    fn gradient(&self, args: &[Value]) -> Value {
        call_gradient(args, "ssum", formulas::ssum)
    }
}

impl FormulaPlugin for Discrete {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "discrete",
            description: "Difference of the first two inputs; returns a bare Number, not an array",
            formula: "x1 − 0.5·x2",
            usage: "discrete(x1=0, x2=0, x3=0)",
            args: &DISCRETE_ARGS,
            returns: "Number",
            examples: &DISCRETE_EXAMPLES,
            category: "attribution",
            related: &[],
        }
    }

    // Bare Number, not a label array
    fn call(&self, args: &[Value]) -> Value {
        match evaluate(args, "discrete", formulas::discrete) {
            Ok(y) => Value::Number(y),
            Err(e) => Value::Error(e),
        }
    }

    fn gradient(&self, args: &[Value]) -> Value {
        call_gradient(args, "discrete", formulas::discrete)
    }
}

impl FormulaPlugin for Psin {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "psin",
            description: "Product of three modulated sines",
            formula: "(1 + sin(π·x1))·(1 + 0.25·sin(2π·x2))·(1 + 0.125·sin(3π·x3))",
            usage: "psin(x1=0, x2=0, x3=0)",
            args: &INPUT_ARGS,
            returns: "Array<f32>[1]",
            examples: &PSIN_EXAMPLES,
            category: "attribution",
            related: &PSIN_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        call_label(args, "psin", formulas::psin)
    }

    fn gradient(&self, args: &[Value]) -> Value {
        call_gradient(args, "psin", formulas::psin)
    }
}

impl FormulaPlugin for Int2 {
    fn meta(&self) -> FormulaMeta {
        FormulaMeta {
            name: "int2",
            description: "Quadratic-sinusoidal interaction plus linear term",
            formula: "x1²·sin(2π·x2) + 2·x3",
            usage: "int2(x1=0, x2=0, x3=0)",
            args: &INPUT_ARGS,
            returns: "Array<f32>[1]",
            examples: &INT2_EXAMPLES,
            category: "attribution",
            related: &[],
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        call_label(args, "int2", formulas::int2)
    }

    fn gradient(&self, args: &[Value]) -> Value {
        call_gradient(args, "int2", formulas::int2)
    }
}
