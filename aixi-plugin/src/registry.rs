//! Formula Registry

use crate::{FormulaMeta, FormulaPlugin};
use aixi_core::{AixiError, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Name-to-formula mapping
///
/// Built once with the `with_formula` builder and read-only afterwards.
/// Lookup is exact: names are matched as registered.
pub struct FormulaRegistry {
    formulas: HashMap<String, Arc<dyn FormulaPlugin>>,
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self {
            formulas: HashMap::new(),
        }
    }

    pub fn with_formula<F: FormulaPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_string();
        self.formulas.insert(name, Arc::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn FormulaPlugin> {
        self.formulas.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formulas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formulas.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Evaluate a formula by name
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        match self.get(name) {
            Some(f) => {
                debug!(formula = name, arity = args.len(), "evaluating formula");
                f.call(args)
            }
            None => Value::Error(self.unknown(name)),
        }
    }

    /// Gradient of a formula by name
    pub fn gradient(&self, name: &str, args: &[Value]) -> Value {
        match self.get(name) {
            Some(f) => {
                debug!(formula = name, arity = args.len(), "differentiating formula");
                f.gradient(args)
            }
            None => Value::Error(self.unknown(name)),
        }
    }

    fn unknown(&self, name: &str) -> AixiError {
        warn!(formula = name, "unknown formula");
        let similar = self.find_similar(name);
        let mut err = AixiError::undefined_formula(name);
        if !similar.is_empty() {
            err = err.with_suggestion(format!(
                "Similar: {}. Registered: {}",
                similar.join(", "),
                self.names().join(", ")
            ));
        }
        err
    }

    /// Names similar to the given one, best match first
    fn find_similar(&self, name: &str) -> Vec<&str> {
        let query = name.to_lowercase();
        let mut matches: Vec<(&str, usize)> = self.formulas.keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, candidate);
                (score > 0).then_some((candidate.as_str(), score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        matches.into_iter().take(3).map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate == query {
            score += 200;
        } else if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();

        // A single shared letter is noise
        if score == 0 && common < 2 {
            return 0;
        }
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 {
            score += 5 - len_diff;
        }

        score
    }

    /// Help for one formula, or an overview when `name` is `None`
    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => match self.get(n) {
                Some(f) => Value::Object(Self::formula_to_help(f.meta())),
                None => Value::Error(self.unknown(n)),
            },
            None => self.general_help(),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();
        help.insert("formulas".to_string(), Value::List(
            self.names().into_iter().map(|n| Value::Text(n.to_string())).collect()
        ));
        help.insert("usage".to_string(),
            Value::Text("Call help('formula_name') for detailed help.".to_string()));
        Value::Object(help)
    }

    fn formula_to_help(meta: FormulaMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("formula".to_string(), Value::Text(meta.formula.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = HashMap::new();
                arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::Text(default.to_string()));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
        ));
        help
    }

    /// Metadata of every formula, sorted by name
    pub fn list(&self, category: Option<&str>) -> Vec<FormulaMeta> {
        self.names().into_iter()
            .filter_map(|n| self.get(n))
            .map(|f| f.meta())
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .collect()
    }
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
