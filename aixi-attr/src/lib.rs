//! AIXI Attribution Functions
//!
//! Label formulas used to synthesize ground truth for the AIXI
//! explainability experiments. Provides:
//! - `ssin`, `ssum`, `discrete`, `psin`, `int2` as generic pure functions
//! - A registry plugin for each, with gradients via dual numbers
//! - `attr_functions()`, the shared name-to-formula registry

pub mod formulas;
mod plugins;

use aixi_plugin::FormulaRegistry;
use std::sync::OnceLock;
use tracing::debug;

pub use formulas::{discrete, int2, psin, ssin, ssin_term, ssum, ssum_term};
pub use plugins::{Discrete, Int2, Psin, Ssin, Ssum};

/// Load the attribution formulas into a registry
pub fn load_attr_functions(registry: FormulaRegistry) -> FormulaRegistry {
    let registry = registry
        .with_formula(Ssin)
        .with_formula(Ssum)
        .with_formula(Discrete)
        .with_formula(Psin)
        .with_formula(Int2);
    debug!(count = registry.len(), "attribution formulas loaded");
    registry
}

/// Shared registry holding exactly the five attribution formulas
pub fn attr_functions() -> &'static FormulaRegistry {
    static REGISTRY: OnceLock<FormulaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| load_attr_functions(FormulaRegistry::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aixi_core::prelude::*;
    use std::f64::consts::PI;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn nums(xs: &[f64]) -> Vec<Value> {
        xs.iter().copied().map(Value::Number).collect()
    }

    fn label(v: &Value) -> f32 {
        match v.as_array() {
            Some([y]) => *y,
            other => panic!("expected one-element array, got {:?}", other),
        }
    }

    fn grad(v: &Value) -> Vec<f64> {
        v.as_list()
            .expect("gradient should be a list")
            .iter()
            .map(|g| g.as_number().expect("gradient entries are numbers"))
            .collect()
    }

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-9, "got {:?}, want {:?}", got, want);
        }
    }

    #[test]
    fn test_registry_has_exactly_five() {
        let r = attr_functions();
        assert_eq!(r.names(), vec!["discrete", "int2", "psin", "ssin", "ssum"]);
    }

    #[test]
    fn test_shared_registry_is_single_instance() {
        assert!(std::ptr::eq(attr_functions(), attr_functions()));
    }

    #[test]
    fn test_documented_values() {
        init_tracing();
        let r = attr_functions();
        assert!((label(&r.call("ssin", &nums(&[1.0, 0.0, 0.0]))) - 0.5).abs() < 1e-6);
        assert_eq!(label(&r.call("ssum", &nums(&[2.0, 4.0, 6.0]))), 3.0);
        assert_eq!(label(&r.call("psin", &nums(&[0.0, 0.0, 0.0]))), 1.0);
        assert_eq!(label(&r.call("int2", &nums(&[2.0, 0.0, 5.0]))), 10.0);
    }

    #[test]
    fn test_discrete_returns_bare_number() {
        let r = attr_functions();
        let y = r.call("discrete", &nums(&[3.0, 2.0, 123.0]));
        assert_eq!(y, Value::Number(2.0));
        assert!(y.as_array().is_none());
    }

    #[test]
    fn test_all_defaults() {
        let r = attr_functions();
        assert_eq!(r.call("ssin", &[]), Value::label(0.0));
        assert_eq!(r.call("ssum", &[]), Value::label(0.0));
        assert_eq!(r.call("discrete", &[]), Value::Number(0.0));
        assert_eq!(r.call("psin", &[]), Value::label(1.0));
        assert_eq!(r.call("int2", &[]), Value::label(0.0));
    }

    #[test]
    fn test_partial_arguments_default_the_rest() {
        let r = attr_functions();
        assert_eq!(r.call("ssum", &nums(&[2.0])), Value::label(1.0));
        assert_eq!(r.call("int2", &[Value::Null, Value::Null, Value::Number(1.5)]), Value::label(3.0));
    }

    #[test]
    fn test_output_is_narrowed_to_f32() {
        let r = attr_functions();
        let y = label(&r.call("ssin", &nums(&[1.0, 1.0, 1.0])));
        assert_eq!(y, (0.5f64 + 0.25 + 1.0 / 6.0) as f32);
    }

    #[test]
    fn test_plugin_matches_generic_function() {
        let r = attr_functions();
        let x = [0.3, -1.2, 2.7];
        let cases: [(&str, fn(f64, f64, f64) -> f64); 4] = [
            ("ssin", ssin),
            ("ssum", ssum),
            ("psin", psin),
            ("int2", int2),
        ];
        for (name, f) in cases {
            let got = label(&r.call(name, &nums(&x)));
            assert_eq!(got, f(x[0], x[1], x[2]) as f32, "{}", name);
        }
    }

    #[test]
    fn test_gradients() {
        let r = attr_functions();
        assert_close(&grad(&r.gradient("ssum", &[])), &[0.5, 0.25, 1.0 / 6.0]);
        assert_close(&grad(&r.gradient("discrete", &nums(&[4.0, 1.0, 9.0]))), &[1.0, -0.5, 0.0]);
        assert_close(&grad(&r.gradient("int2", &nums(&[2.0, 0.0, 5.0]))), &[0.0, 8.0 * PI, 2.0]);
        assert_close(&grad(&r.gradient("ssin", &[])), &[PI / 4.0, PI / 8.0, PI / 12.0]);
        assert_close(&grad(&r.gradient("psin", &[])), &[PI, PI / 2.0, 3.0 * PI / 8.0]);
    }

    #[test]
    fn test_gradient_matches_finite_difference() {
        let x = [0.4, 0.7, -0.3];
        let h = 1e-6;
        let g = grad(&attr_functions().gradient("psin", &nums(&x)));
        for i in 0..3 {
            let mut hi = x;
            let mut lo = x;
            hi[i] += h;
            lo[i] -= h;
            let fd = (psin(hi[0], hi[1], hi[2]) - psin(lo[0], lo[1], lo[2])) / (2.0 * h);
            assert!((g[i] - fd).abs() < 1e-6, "d/dx{}: {} vs {}", i + 1, g[i], fd);
        }
    }

    #[test]
    fn test_unknown_formula() {
        init_tracing();
        let err = attr_functions().call("ssinn", &[]);
        let err = err.as_error().expect("lookup should fail");
        assert_eq!(err.code, codes::UNDEFINED_FORMULA);
        assert!(err.suggestion.as_deref().unwrap_or_default().contains("ssin"));
    }

    #[test]
    fn test_non_numeric_input() {
        let err = attr_functions().call("psin", &[Value::from("a")]);
        let err = err.as_error().expect("text input should fail");
        assert_eq!(err.code, codes::ARG_TYPE);
        assert_eq!(err.formula.as_deref(), Some("psin"));

        let err = attr_functions().gradient("int2", &[Value::Array(vec![1.0, 2.0])]);
        assert_eq!(err.as_error().map(|e| e.code.as_str()), Some(codes::ARG_TYPE));
    }

    #[test]
    fn test_label_feeds_back_as_input() {
        let r = attr_functions();
        assert_eq!(r.call("ssum", &[Value::label(2.0)]), Value::label(1.0));

        // ssin(1) = [0.5], then ssum(0.5, 0.5) = 0.25 + 0.125
        let y = r.call("ssin", &nums(&[1.0]));
        let z = r.call("ssum", &[y.clone(), y.clone()]);
        assert!((label(&z) - 0.375).abs() < 1e-6);

        assert_eq!(r.call("discrete", &[y]), Value::Number(0.5));

        let g = grad(&r.gradient("int2", &[Value::label(2.0), Value::label(0.0), Value::label(5.0)]));
        assert_close(&g, &[0.0, 8.0 * PI, 2.0]);
    }

    #[test]
    fn test_too_many_inputs() {
        let err = attr_functions().call("ssum", &nums(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(err.as_error().map(|e| e.code.as_str()), Some(codes::ARG_COUNT));
    }

    #[test]
    fn test_custom_registry_composition() {
        let r = load_attr_functions(FormulaRegistry::new());
        assert_eq!(r.len(), 5);
        assert!(r.get("int2").is_some());

        let metas = r.list(Some("attribution"));
        assert_eq!(metas.len(), 5);
        let json = serde_json::to_value(&metas).unwrap();
        assert_eq!(json[0]["name"], "discrete");
        assert_eq!(json[0]["returns"], "Number");
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    attr_functions().call("ssum", &[Value::Number(2.0 * i as f64)])
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), Value::label(i as f64));
        }
    }
}
