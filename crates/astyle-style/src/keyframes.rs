//! `@keyframes` declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use astyle_core::astyle_debug;
use astyle_core::logging::targets;

use crate::Declaration;
use crate::declaration::css_name;

/// Declarations keyed by keyframe selector (`from`, `50%`, `to`).
///
/// # Example
///
/// ```
/// use astyle_style::{Declaration, Keyframes};
///
/// let fade = Keyframes::new()
///     .with("from", Declaration::new().with("opacity", 0))
///     .with("to", Declaration::new().with("opacity", 1));
///
/// assert_eq!(
///     fade.to_rule("a1"),
///     "@keyframes a1 { from { opacity: 0; } to { opacity: 1; } }"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframes {
    stops: IndexMap<String, Declaration>,
}

impl Keyframes {
    /// Create an empty set of keyframes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop (builder style).
    pub fn with(mut self, stop: impl Into<String>, declaration: Declaration) -> Self {
        self.insert(stop, declaration);
        self
    }

    /// Set the declaration for a stop.
    pub fn insert(&mut self, stop: impl Into<String>, declaration: Declaration) {
        self.stops.insert(stop.into(), declaration);
    }

    /// Get the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Check if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterate over stops in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.stops.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the `@keyframes` rule under `name`.
    ///
    /// Only scalar entries are emitted; null and nested values are skipped.
    pub fn to_rule(&self, name: &str) -> String {
        let mut rule = format!("@keyframes {name} {{");
        for (stop, declaration) in self.iter() {
            rule.push_str(&format!(" {stop} {{"));
            for (property, value) in declaration.iter() {
                if !value.is_scalar() {
                    astyle_debug!(
                        target: targets::ENGINE,
                        stop,
                        property,
                        "skipping non-scalar keyframe value"
                    );
                    continue;
                }
                rule.push_str(&format!(" {}: {value};", css_name(property)));
            }
            rule.push_str(" }");
        }
        rule.push_str(" }");
        rule
    }
}
