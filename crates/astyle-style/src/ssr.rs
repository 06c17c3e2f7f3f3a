//! Server-render capture and rehydration.
//!
//! A server renders with a synthetic sheet, then [`Styler::capture`]s the
//! sheet text and the injected identifiers. The text is delivered with the
//! page (see [`Capture::style_tag`]); the identifiers seed the client's
//! engine through [`Styler::rehydrate`] so it does not insert those rules a
//! second time. Rehydration never writes rule text itself.
//!
//! [`Styler::capture`]: crate::Styler::capture
//! [`Styler::rehydrate`]: crate::Styler::rehydrate

use serde::{Deserialize, Serialize};

use crate::Result;

/// `id` of the script element carrying identifiers for rehydration.
pub const HYDRATION_SCRIPT_ID: &str = "astyle-ids";

/// A snapshot of an engine's sheet and injected-id cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Newline-joined rule text of the synthetic sheet.
    pub contents: String,
    /// Injected class identifiers, in insertion order.
    pub ids: Vec<String>,
}

impl Capture {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The captured rules as a `<style>` element.
    pub fn style_tag(&self) -> String {
        format!(
            "<style data-renderer=\"astyle\" data-renderer-phase=\"server\">{}</style>",
            self.contents.replace("</", "<\\/")
        )
    }

    /// The identifiers as a JSON `<script>` element.
    pub fn hydration_script(&self) -> Result<String> {
        let ids = serde_json::to_string(&self.ids)?.replace('<', "\\u003c");
        Ok(format!(
            "<script type=\"application/json\" id=\"{HYDRATION_SCRIPT_ID}\">{ids}</script>"
        ))
    }

    /// Read the identifier list written by [`hydration_script`](Self::hydration_script).
    pub fn from_hydration_json(json: &str) -> Result<Self> {
        Ok(Self {
            contents: String::new(),
            ids: serde_json::from_str(json)?,
        })
    }
}
