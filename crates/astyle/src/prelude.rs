//! Prelude module for astyle.
//!
//! ```ignore
//! use astyle::prelude::*;
//! ```
//!
//! This provides access to:
//! - The `style!` macro and declaration types
//! - The compilation engine and its options
//! - Class map composition (`compose`, `cx`)
//! - Server rendering (`StylesheetServer`, `Capture`)

pub use astyle_style::prelude::*;

pub use crate::{RenderedPage, StylesheetServer, render_static, try_render_static};
