//! The compilation engine.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use astyle_core::hash::{hash, seeds};
use astyle_core::logging::targets;
use astyle_core::{RuleSink, Sheet, astyle_debug, astyle_trace, astyle_warn};

use super::{ClassMap, InjectionMode, StylerOptions};
use crate::declaration::css_name;
use crate::ssr::Capture;
use crate::{Declaration, Error, Keyframes, Pseudo, Result, ThemeVariables, Value};

/// Derive the class identifier for one property/value pair.
///
/// ```
/// use astyle_style::{class_id, Value};
///
/// let id = class_id("color", &Value::from("red"));
/// assert!(id.starts_with('c'));
/// assert_eq!(id, class_id("color", &Value::from("red")));
/// ```
pub fn class_id(property: &str, value: &Value) -> String {
    format!(
        "c{}{}",
        hash(property, seeds::PROPERTY),
        hash(&value.to_string(), seeds::VALUE)
    )
}

/// Compiles declarations into class maps and writes their rules to a sheet.
///
/// Each engine owns one [`Sheet`] and one injected-id cache. A given
/// property/value pair (after transforms) always maps to the same class
/// identifier, and its rule is written at most once per engine no matter how
/// many declarations or namespaces request it.
///
/// Engines are not meant to be shared between concurrent renders; create one
/// per request when rendering on a server.
///
/// # Example
///
/// ```
/// use astyle_style::{style, Styler, StylerOptions};
///
/// let mut styler = Styler::synthetic(StylerOptions::new().with_standard_transforms());
/// let classes = styler.compile(&style! {
///     "width" => 10,
///     ":hover" => { "color" => "red" },
/// })?;
///
/// assert_eq!(classes.len(), 2);
/// assert!(classes.contains_key("color:hover"));
/// assert!(styler.capture().contents.contains("{ width: 10px; }"));
/// # Ok::<(), astyle_style::Error>(())
/// ```
#[derive(Debug)]
pub struct Styler {
    options: StylerOptions,
    sheet: Sheet,
    injected: IndexSet<String>,
    injected_globals: HashSet<String>,
    animation_count: u64,
}

impl Styler {
    /// Create an engine for the current environment.
    ///
    /// Uses the live document stylesheet when one is reachable, and a
    /// synthetic sheet otherwise. Fails if a document exists but its
    /// stylesheet cannot be obtained.
    pub fn new(options: StylerOptions) -> Result<Self> {
        Ok(Self::with_sheet(options, Sheet::detect()?))
    }

    /// Create an engine writing to an in-memory sheet.
    pub fn synthetic(options: StylerOptions) -> Self {
        Self::with_sheet(options, Sheet::synthetic())
    }

    /// Create an engine writing to the given sheet.
    pub fn with_sheet(options: StylerOptions, sheet: Sheet) -> Self {
        Self {
            options,
            sheet,
            injected: IndexSet::new(),
            injected_globals: HashSet::new(),
            animation_count: 0,
        }
    }

    /// Get the engine options.
    pub fn options(&self) -> &StylerOptions {
        &self.options
    }

    /// Get the injection mode.
    pub fn mode(&self) -> InjectionMode {
        self.options.mode
    }

    /// Get the sheet rules are written to.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Check whether a class identifier is in the injected-id cache.
    pub fn is_injected(&self, id: &str) -> bool {
        self.injected.contains(id)
    }

    /// Iterate over injected identifiers in insertion order.
    pub fn injected_ids(&self) -> impl Iterator<Item = &str> {
        self.injected.iter().map(String::as_str)
    }

    /// Run the configured transforms over a declaration.
    pub fn transform(&self, declaration: &Declaration) -> Declaration {
        self.options.transforms.run(declaration)
    }

    /// Compile a declaration into a class map.
    ///
    /// Recognized pseudo-selector keys holding a nested declaration produce
    /// entries keyed `property:pseudo`. A pseudo-selector block inside
    /// another is rejected with [`Error::InvalidNesting`].
    ///
    /// In [`InjectionMode::Noop`] nothing is hashed or written: the result
    /// mirrors the transformed declaration, each key mapped to its value
    /// text (nested blocks included as written, null entries dropped).
    pub fn compile(&mut self, declaration: &Declaration) -> Result<ClassMap> {
        let _span = tracing::trace_span!(
            target: targets::ENGINE,
            "compile",
            entries = declaration.len(),
            mode = %self.options.mode,
        )
        .entered();

        if self.options.mode == InjectionMode::Noop {
            return Ok(self.passthrough(declaration));
        }

        let mut classes = ClassMap::new();
        self.compile_into(declaration, None, &mut classes)?;
        Ok(classes)
    }

    fn compile_into(
        &mut self,
        declaration: &Declaration,
        modifier: Option<Pseudo>,
        classes: &mut ClassMap,
    ) -> Result<()> {
        let declaration = self.transform(declaration);

        for (name, value) in declaration.iter() {
            if value.is_null() {
                continue;
            }

            if let (Some(pseudo), Value::Nested(nested)) = (Pseudo::from_key(name), value) {
                if let Some(outer) = modifier {
                    return Err(Error::invalid_nesting(outer.as_str(), pseudo.as_str()));
                }
                self.compile_into(nested, Some(pseudo), classes)?;
                continue;
            }

            let id = class_id(name, value);
            let suffix = modifier.map_or("", |pseudo| pseudo.as_str());

            if self.injected.contains(&id) {
                astyle_trace!(target: targets::ENGINE, id = %id, "class already injected");
            } else {
                let rule = format!(".{id}{suffix} {{ {}: {value}; }}", css_name(name));
                self.insert(&rule)?;
                astyle_trace!(target: targets::ENGINE, id = %id, rule = %rule, "inserted rule");
                self.injected.insert(id.clone());
            }

            classes.insert(format!("{name}{suffix}"), id);
        }
        Ok(())
    }

    fn passthrough(&self, declaration: &Declaration) -> ClassMap {
        self.transform(declaration)
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }

    fn insert(&mut self, rule: &str) -> Result<()> {
        if let Err(err) = self.sheet.insert_rule(rule, 0) {
            astyle_warn!(target: targets::ENGINE, rule, error = %err, "sink rejected rule");
            return Err(err.into());
        }
        Ok(())
    }

    /// Compile several named declarations.
    ///
    /// Namespaces are compiled independently; shared property/value pairs
    /// share one class and one rule.
    pub fn create<'a, I, K>(&mut self, namespaces: I) -> Result<IndexMap<String, ClassMap>>
    where
        I: IntoIterator<Item = (K, &'a Declaration)>,
        K: Into<String>,
    {
        namespaces
            .into_iter()
            .map(|(name, declaration)| Ok((name.into(), self.compile(declaration)?)))
            .collect()
    }

    /// Write a raw rule, once per distinct text.
    pub fn inject_global(&mut self, css: &str) -> Result<()> {
        if self.injected_globals.contains(css) {
            return Ok(());
        }
        self.insert(css)?;
        self.injected_globals.insert(css.to_string());
        astyle_trace!(target: targets::ENGINE, rule = css, "inserted global rule");
        Ok(())
    }

    /// Write custom properties as a rule scoped to `selector`.
    pub fn inject_theme(&mut self, selector: &str, variables: &ThemeVariables) -> Result<()> {
        self.inject_global(&variables.to_rule(selector))
    }

    /// Write an `@keyframes` rule and return its generated name.
    ///
    /// Every call generates a new name, from a counter owned by this engine.
    pub fn keyframes(&mut self, keyframes: &Keyframes) -> Result<String> {
        let name = format!(
            "a{}",
            hash(&self.animation_count.to_string(), seeds::ANIMATION)
        );
        self.insert(&keyframes.to_rule(&name))?;
        self.animation_count += 1;
        astyle_trace!(target: targets::ENGINE, name = %name, "inserted keyframes");
        Ok(name)
    }

    /// Render a declaration as an inline `style` attribute value.
    ///
    /// Transforms are applied; pseudo-selector blocks and other non-scalar
    /// values cannot be expressed inline and are omitted.
    pub fn inline_style(&self, declaration: &Declaration) -> String {
        self.transform(declaration)
            .iter()
            .filter(|(_, value)| value.is_scalar())
            .map(|(name, value)| format!("{}: {value};", css_name(name)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Snapshot the sheet text and the injected-id cache.
    ///
    /// `contents` is empty unless the engine writes to a synthetic sheet.
    pub fn capture(&self) -> Capture {
        let capture = Capture {
            contents: self.sheet.contents(),
            ids: self.injected.iter().cloned().collect(),
        };
        astyle_debug!(
            target: targets::SSR,
            ids = capture.ids.len(),
            bytes = capture.contents.len(),
            "captured stylesheet"
        );
        capture
    }

    /// Mark every identifier of `capture` as already injected.
    ///
    /// No rule text is written: the captured CSS must reach the document by
    /// other means (see [`Capture::style_tag`]).
    pub fn rehydrate(&mut self, capture: &Capture) {
        self.seed_ids(capture.ids.iter().cloned());
    }

    /// Mark identifiers as already injected.
    pub fn seed_ids<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.injected.len();
        self.injected.extend(ids.into_iter().map(Into::into));
        astyle_debug!(
            target: targets::SSR,
            seeded = self.injected.len() - before,
            "rehydrated injected ids"
        );
    }
}
