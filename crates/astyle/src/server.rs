//! Server rendering with stylesheet capture.

use astyle_core::astyle_debug;
use astyle_core::logging::targets;
use astyle_style::{Capture, Result, Styler, StylerOptions};

/// The output of one server render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage<T> {
    /// Whatever the render closure produced (usually markup).
    pub body: T,
    /// The sheet text and injected identifiers the render produced.
    pub css: Capture,
}

impl<T> RenderedPage<T> {
    /// Markup for the document head: the captured rules followed by the
    /// identifier script a client engine rehydrates from.
    pub fn head(&self) -> Result<String> {
        let script = self.css.hydration_script()?;
        Ok(format!("{}{script}", self.css.style_tag()))
    }

    /// Transform the body, keeping the capture.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RenderedPage<U> {
        RenderedPage {
            body: f(self.body),
            css: self.css,
        }
    }
}

/// Run `render` against `styler` and capture what it injected.
///
/// The capture covers everything in the engine's sheet, including rules
/// written before this call.
pub fn render_static<T>(
    styler: &mut Styler,
    render: impl FnOnce(&mut Styler) -> T,
) -> RenderedPage<T> {
    let body = render(styler);
    RenderedPage {
        body,
        css: styler.capture(),
    }
}

/// Fallible form of [`render_static`].
pub fn try_render_static<T>(
    styler: &mut Styler,
    render: impl FnOnce(&mut Styler) -> Result<T>,
) -> Result<RenderedPage<T>> {
    let body = render(styler)?;
    Ok(RenderedPage {
        body,
        css: styler.capture(),
    })
}

/// Renders pages, each with its own synthetic engine.
///
/// Engines are never shared between renders, so concurrent requests cannot
/// observe each other's injected-id cache.
#[derive(Debug, Clone, Default)]
pub struct StylesheetServer {
    options: StylerOptions,
}

impl StylesheetServer {
    /// Create a server whose engines use `options`.
    pub fn new(options: StylerOptions) -> Self {
        Self { options }
    }

    /// Get the engine options.
    pub fn options(&self) -> &StylerOptions {
        &self.options
    }

    /// Create a fresh engine for one render.
    pub fn styler(&self) -> Styler {
        Styler::synthetic(self.options.clone())
    }

    /// Render one page with a fresh engine.
    pub fn render<T>(
        &self,
        render: impl FnOnce(&mut Styler) -> Result<T>,
    ) -> Result<RenderedPage<T>> {
        let mode = self.options.mode;
        let span = tracing::debug_span!(target: targets::SSR, "render", %mode);
        let _enter = span.enter();

        let mut styler = self.styler();
        let page = try_render_static(&mut styler, render)?;
        astyle_debug!(
            target: targets::SSR,
            rules = page.css.contents.lines().count(),
            "page rendered"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astyle_style::{Error, InjectionMode, style};

    #[test]
    fn renders_are_isolated() {
        let server = StylesheetServer::default();
        let declaration = style! { "color" => "red" };
        let compile = |styler: &mut Styler| styler.compile(&declaration);

        let first = server.render(compile).unwrap();
        let second = server.render(compile).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.css.ids.len(), 1);
        assert!(!second.css.contents.is_empty());
    }

    #[test]
    fn render_errors_propagate() {
        let server = StylesheetServer::default();
        let nested = style! { ":hover" => { ":focus" => { "color" => "red" } } };

        let result = server.render(|styler| styler.compile(&nested));
        assert!(matches!(result, Err(Error::InvalidNesting { .. })));
    }

    #[test]
    fn server_uses_options() {
        let options = StylerOptions::new().with_mode(InjectionMode::Noop);
        let server = StylesheetServer::new(options);
        let declaration = style! { "color" => "red" };

        let page = server.render(|styler| styler.compile(&declaration));
        let page = page.unwrap();
        assert_eq!(page.body.get("color"), Some("red"));
        assert_eq!(page.css, Capture::default());
    }

    #[test]
    fn render_static_captures_earlier_rules() {
        let mut styler = Styler::synthetic(StylerOptions::default());
        styler.inject_global("html { color: black; }").unwrap();

        let page = render_static(&mut styler, |_| "<p></p>");
        assert_eq!(page.body, "<p></p>");
        assert_eq!(page.css.contents, "html { color: black; }");
        assert!(page.css.ids.is_empty());
    }

    #[test]
    fn head_markup() {
        let mut styler = Styler::synthetic(StylerOptions::default());
        let declaration = style! { "width" => "1px" };
        let page = try_render_static(&mut styler, |styler| styler.compile(&declaration))
            .unwrap()
            .map(|classes| classes.class_names());

        let head = page.head().unwrap();
        let open = r#"<style data-renderer="astyle" data-renderer-phase="server">"#;
        assert!(head.starts_with(open));
        assert!(head.contains(&format!(r#"["{}"]"#, page.body)));
    }
}
