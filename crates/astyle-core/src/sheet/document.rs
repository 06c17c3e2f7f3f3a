//! The live document stylesheet.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleSheet, Document, Element, HtmlStyleElement};

use super::RuleSink;
use crate::logging::targets;
use crate::{Error, Result, astyle_info};

/// Attribute marking the style element astyle writes into.
pub const RENDERER_ATTRIBUTE: &str = "data-renderer";
/// Value of [`RENDERER_ATTRIBUTE`] for astyle's element.
pub const RENDERER_NAME: &str = "astyle";

/// The CSSOM stylesheet of a `<style data-renderer="astyle">` element.
///
/// The element is looked up in `<head>` and created on first use, so every
/// engine in the same document shares one stylesheet.
pub struct DocumentStyleSheet {
    sheet: CssStyleSheet,
}

impl DocumentStyleSheet {
    /// Attach to the current document.
    ///
    /// Returns `Ok(None)` when there is no window, document or `<head>`.
    /// Fails if a document exists but its stylesheet cannot be obtained.
    pub fn attach() -> Result<Option<Self>> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Ok(None);
        };
        if document.head().is_none() {
            return Ok(None);
        }

        let element = Self::find_or_create_element(&document)?;
        let element = element
            .dyn_into::<HtmlStyleElement>()
            .map_err(|_| Error::sink_unavailable("renderer element is not a <style>"))?;
        let sheet = element
            .sheet()
            .ok_or_else(|| Error::sink_unavailable("style element has no sheet"))?
            .dyn_into::<CssStyleSheet>()
            .map_err(|_| Error::sink_unavailable("style element sheet is not a CSSStyleSheet"))?;

        astyle_info!(target: targets::SHEET, "attached to document stylesheet");
        Ok(Some(Self { sheet }))
    }

    fn find_or_create_element(document: &Document) -> Result<Element> {
        let selector = format!("head style[{RENDERER_ATTRIBUTE}=\"{RENDERER_NAME}\"]");
        if let Some(existing) = document.query_selector(&selector).map_err(unavailable)? {
            return Ok(existing);
        }

        let head = document
            .head()
            .ok_or_else(|| Error::sink_unavailable("document has no <head>"))?;
        let element = document.create_element("style").map_err(unavailable)?;
        element
            .set_attribute(RENDERER_ATTRIBUTE, RENDERER_NAME)
            .map_err(unavailable)?;
        element
            .set_attribute("data-renderer-phase", "client")
            .map_err(unavailable)?;
        element
            .append_child(&document.create_text_node(""))
            .map_err(unavailable)?;
        head.append_child(&element).map_err(unavailable)?;
        Ok(element)
    }
}

impl RuleSink for DocumentStyleSheet {
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<()> {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.sheet
            .insert_rule_with_index(rule, index)
            .map(|_| ())
            .map_err(|e| Error::insert_rule(rule, format!("{e:?}")))
    }
}

fn unavailable(error: JsValue) -> Error {
    Error::sink_unavailable(format!("{error:?}"))
}
