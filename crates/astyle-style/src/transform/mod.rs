//! Declaration transforms.
//!
//! A transform rewrites a declaration before it is hashed. Transforms are
//! pure and run left to right, once per compilation (and once more for each
//! nested pseudo-selector block as it is compiled).
//!
//! Any `Fn(Declaration) -> Declaration` is a transform:
//!
//! ```
//! use astyle_style::transform::TransformPipeline;
//! use astyle_style::{Declaration, Value};
//!
//! let pipeline = TransformPipeline::standard().with(|mut d: Declaration| {
//!     d.remove("float");
//!     d
//! });
//!
//! let out = pipeline.run(&Declaration::new().with("width", 10).with("float", "left"));
//! assert_eq!(out.get("width"), Some(&Value::from("10px")));
//! assert!(!out.contains("float"));
//! ```

mod expansion;
mod units;

pub use expansion::{expand_box_shorthand, split_shorthand};
pub use units::infer_units;

use std::fmt;
use std::sync::Arc;

use crate::Declaration;

/// A pure rewrite of a declaration.
pub trait Transform: Send + Sync {
    /// Apply the transform.
    fn apply(&self, declaration: Declaration) -> Declaration;
}

impl<F> Transform for F
where
    F: Fn(Declaration) -> Declaration + Send + Sync,
{
    fn apply(&self, declaration: Declaration) -> Declaration {
        self(declaration)
    }
}

/// An ordered list of transforms.
#[derive(Clone, Default)]
pub struct TransformPipeline {
    transforms: Vec<Arc<dyn Transform>>,
}

impl TransformPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Box-shorthand expansion followed by unit inference.
    pub fn standard() -> Self {
        Self::new().with(expand_box_shorthand).with(infer_units)
    }

    /// Append a transform.
    pub fn push(&mut self, transform: impl Transform + 'static) {
        self.transforms.push(Arc::new(transform));
    }

    /// Append a transform (builder style).
    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.push(transform);
        self
    }

    /// Get the number of transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run every transform over a copy of `declaration`.
    pub fn run(&self, declaration: &Declaration) -> Declaration {
        self.transforms
            .iter()
            .fold(declaration.clone(), |acc, transform| transform.apply(acc))
    }
}

impl fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("len", &self.transforms.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn empty_pipeline_is_identity() {
        let declaration = Declaration::new()
            .with("margin", "1px 2px")
            .with("width", 3);
        assert_eq!(TransformPipeline::new().run(&declaration), declaration);
    }

    #[test]
    fn transforms_run_left_to_right() {
        let pipeline = TransformPipeline::new()
            .with(|d: Declaration| d.with("step", "first"))
            .with(|d: Declaration| d.with("step", "second"));

        let out = pipeline.run(&Declaration::new());
        assert_eq!(out.get("step"), Some(&Value::from("second")));
        assert_eq!(pipeline.len(), 2);
    }

    #[test]
    fn standard_expands_then_infers_units() {
        let declaration = Declaration::new().with("padding", 4);
        let out = TransformPipeline::standard().run(&declaration);

        for side in ["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"] {
            assert_eq!(out.get(side), Some(&Value::from("4px")), "{side}");
        }
        assert!(!out.contains("padding"));
    }

    #[test]
    fn input_is_not_modified() {
        let declaration = Declaration::new().with("margin", 1);
        let _ = TransformPipeline::standard().run(&declaration);
        assert_eq!(declaration.get("margin"), Some(&Value::Number(1.0)));
    }
}
