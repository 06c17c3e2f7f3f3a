//! Atomic CSS compilation for astyle.
//!
//! A [`Declaration`] is an ordered map of CSS properties to values. The
//! [`Styler`] engine turns every property/value pair into a short,
//! deterministic class identifier and writes one single-declaration rule per
//! identifier to its sheet:
//!
//! ```
//! use astyle_style::prelude::*;
//!
//! let mut styler = Styler::synthetic(StylerOptions::default());
//! let button = styler.compile(&style! {
//!     "backgroundColor" => "blue",
//!     ":hover" => { "backgroundColor" => "navy" },
//! })?;
//!
//! let class = button.class_names();
//! assert_eq!(class.split(' ').count(), 2);
//! # Ok::<(), astyle_style::Error>(())
//! ```
//!
//! Related modules:
//!
//! - [`transform`]: declaration rewrites applied before hashing
//! - [`ssr`]: capturing a server render and seeding a client engine

pub mod declaration;
mod engine;
mod error;
mod keyframes;
pub mod ssr;
mod theme;
pub mod transform;

pub use declaration::{Declaration, Pseudo, Value, css_name};
pub use engine::{ClassMap, InjectionMode, Styler, StylerOptions, class_id, compose, cx};
pub use error::{Error, Result};
pub use keyframes::Keyframes;
pub use ssr::Capture;
pub use theme::ThemeVariables;
pub use transform::{Transform, TransformPipeline};

/// Commonly used items.
pub mod prelude {
    pub use crate::style;
    pub use crate::{
        Capture, ClassMap, Declaration, InjectionMode, Keyframes, Styler, StylerOptions,
        ThemeVariables, Value, compose, cx,
    };
}
