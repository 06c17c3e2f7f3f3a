//! astyle - atomic CSS compiled from Rust declarations.
//!
//! This is the umbrella crate that re-exports all public APIs.
//!
//! # Example
//!
//! ```
//! use astyle::prelude::*;
//!
//! let server = StylesheetServer::new(StylerOptions::new().with_standard_transforms());
//! let page = server.render(|styler| {
//!     let card = styler.compile(&style! { "padding" => 8, "color" => "#333" })?;
//!     Ok(format!(r#"<div class="{card}">hello</div>"#))
//! })?;
//!
//! assert!(page.css.contents.contains("padding-top: 8px"));
//! assert!(page.head()?.starts_with("<style"));
//! # Ok::<(), astyle::Error>(())
//! ```

pub use astyle_core::{Error as SheetError, RuleSink, Sheet, SyntheticStyleSheet, hash};
pub use astyle_style::*;

#[cfg(feature = "web")]
pub use astyle_core::DocumentStyleSheet;

/// Logging targets and macros.
pub mod logging {
    pub use astyle_core::logging::*;
}

mod server;

pub use server::{RenderedPage, StylesheetServer, render_static, try_render_static};

pub mod prelude;
