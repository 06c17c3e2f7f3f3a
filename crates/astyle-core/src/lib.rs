//! Core primitives for astyle.
//!
//! This crate provides the leaf components the style compiler is built on:
//!
//! - **Hashing**: Seeded, deterministic string hashing for class identifiers
//! - **Rule Sinks**: The single `insert_rule` capability, with a synthetic
//!   in-memory stylesheet and (behind the `web` feature) the live document one
//! - **Logging**: `tracing` targets and macros shared by the astyle crates
//!
//! # Example
//!
//! ```
//! use astyle_core::{RuleSink, SyntheticStyleSheet};
//!
//! let mut sheet = SyntheticStyleSheet::new();
//! sheet.insert_rule(".a { color: red; }", 0).unwrap();
//! sheet.insert_rule(".a { color: red; }", 0).unwrap();
//!
//! assert_eq!(sheet.len(), 1);
//! assert_eq!(sheet.to_string(), ".a { color: red; }");
//! ```

pub mod hash;
pub mod logging;
pub mod sheet;

mod error;

pub use error::{Error, Result};
pub use hash::hash;
pub use sheet::{RuleSink, Sheet, SyntheticStyleSheet};

#[cfg(feature = "web")]
pub use sheet::DocumentStyleSheet;
