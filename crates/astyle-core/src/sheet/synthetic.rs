//! In-memory stylesheet.

use std::fmt;

use indexmap::IndexSet;

use super::RuleSink;
use crate::logging::targets;
use crate::{Result, astyle_trace};

/// An ordered, duplicate-free collection of rule text.
///
/// Used whenever no live document is available (server rendering, tests).
/// Inserting identical text twice keeps the first entry. The `index`
/// argument of [`RuleSink::insert_rule`] is ignored: rules are kept in
/// insertion order, and [`Display`](fmt::Display) joins them with newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntheticStyleSheet {
    rules: IndexSet<String>,
}

impl SyntheticStyleSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of distinct rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check whether identical rule text has been inserted.
    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains(rule)
    }

    /// Iterate over rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }
}

impl RuleSink for SyntheticStyleSheet {
    fn insert_rule(&mut self, rule: &str, _index: usize) -> Result<()> {
        if self.rules.insert(rule.to_string()) {
            astyle_trace!(target: targets::SHEET, rule, "synthetic rule added");
        }
        Ok(())
    }
}

impl fmt::Display for SyntheticStyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(rule)?;
        }
        Ok(())
    }
}
