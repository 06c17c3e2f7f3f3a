//! Compilation of declarations into class identifiers.

mod class_map;
mod options;
mod styler;

pub use class_map::{ClassMap, compose, cx};
pub use options::{InjectionMode, StylerOptions};
pub use styler::{Styler, class_id};
