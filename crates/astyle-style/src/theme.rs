//! CSS custom properties (variables).

use indexmap::IndexMap;

use crate::Declaration;

/// A set of CSS custom properties.
///
/// Names are stored with their `--` prefix; it is added when missing, so
/// `set("gap", ..)` and `set("--gap", ..)` address the same variable.
/// Values are referenced from declarations with `var(--name)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVariables {
    variables: IndexMap<String, String>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.variables.insert(variable_name(name.as_ref()), value.into());
    }

    /// Set a variable (builder style).
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(&variable_name(name)).map(String::as_str)
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(&variable_name(name))
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over `(--name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as an inline `style` attribute value.
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as a rule scoped to `selector`.
    pub fn to_rule(&self, selector: &str) -> String {
        if self.is_empty() {
            return format!("{selector} {{ }}");
        }
        format!("{selector} {{ {} }}", self.to_inline_style())
    }

    /// Convert to a declaration keyed by `--name`.
    pub fn to_declaration(&self) -> Declaration {
        self.iter().collect()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ThemeVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.set(name, value);
        }
        vars
    }
}

fn variable_name(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{name}")
    }
}
