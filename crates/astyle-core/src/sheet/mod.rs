//! Rule sinks: destinations for generated CSS rules.
//!
//! Every sink exposes the same single capability, [`RuleSink::insert_rule`].
//! [`Sheet`] selects one implementation when an engine is constructed:
//!
//! - [`SyntheticStyleSheet`]: in-memory, used for server rendering and tests
//! - `DocumentStyleSheet` (`web` feature): the live document's stylesheet
//! - any host-provided sink boxed into [`Sheet::Host`]

mod synthetic;

#[cfg(feature = "web")]
mod document;

pub use synthetic::SyntheticStyleSheet;

#[cfg(feature = "web")]
pub use document::DocumentStyleSheet;

use std::fmt;

use crate::Result;

/// The capability of accepting CSS rule text.
pub trait RuleSink {
    /// Insert `rule` at position `index` of the sheet.
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()>;
}

/// The sink owned by one engine instance.
pub enum Sheet {
    /// In-memory stylesheet.
    Synthetic(SyntheticStyleSheet),
    /// The live document stylesheet.
    #[cfg(feature = "web")]
    Document(DocumentStyleSheet),
    /// A sink supplied by the host environment.
    Host(Box<dyn RuleSink + Send>),
}

impl Sheet {
    /// Create an empty synthetic sheet.
    pub fn synthetic() -> Self {
        Self::Synthetic(SyntheticStyleSheet::new())
    }

    /// Wrap a host-provided sink.
    pub fn host(sink: impl RuleSink + Send + 'static) -> Self {
        Self::Host(Box::new(sink))
    }

    /// Select the sink for the current environment.
    ///
    /// When a live document is reachable its stylesheet is used; otherwise
    /// rules go to a synthetic sheet. A document whose stylesheet cannot be
    /// obtained is an error rather than a silent fallback.
    pub fn detect() -> Result<Self> {
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        {
            if let Some(sheet) = DocumentStyleSheet::attach()? {
                return Ok(Self::Document(sheet));
            }
        }
        Ok(Self::synthetic())
    }

    /// Check whether this is the in-memory sheet.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    /// Get the synthetic sheet, if that is what this is.
    pub fn as_synthetic(&self) -> Option<&SyntheticStyleSheet> {
        match self {
            Self::Synthetic(sheet) => Some(sheet),
            _ => None,
        }
    }

    /// Serialized rule text.
    ///
    /// Only the synthetic sheet can be read back; other sinks yield an
    /// empty string.
    pub fn contents(&self) -> String {
        self.as_synthetic()
            .map(|sheet| sheet.to_string())
            .unwrap_or_default()
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::synthetic()
    }
}

impl RuleSink for Sheet {
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()> {
        match self {
            Self::Synthetic(sheet) => sheet.insert_rule(rule, index),
            #[cfg(feature = "web")]
            Self::Document(sheet) => sheet.insert_rule(rule, index),
            Self::Host(sink) => sink.insert_rule(rule, index),
        }
    }
}

impl fmt::Debug for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synthetic(sheet) => f.debug_tuple("Synthetic").field(sheet).finish(),
            #[cfg(feature = "web")]
            Self::Document(_) => f.write_str("Document"),
            Self::Host(_) => f.write_str("Host"),
        }
    }
}
