//! AIXI Formula Plugin System
//!
//! Provides the `FormulaPlugin` trait for named label formulas and the
//! `FormulaRegistry` that dispatches to them by name.

mod registry;
mod traits;

pub use registry::FormulaRegistry;
pub use traits::{ArgMeta, FormulaMeta, FormulaPlugin};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{ArgMeta, FormulaMeta, FormulaPlugin, FormulaRegistry};
    pub use aixi_core::prelude::*;
}
