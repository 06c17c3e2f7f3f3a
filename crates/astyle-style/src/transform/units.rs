//! Unit inference for bare numbers.

use crate::{Declaration, Value};

/// Properties whose bare numbers are pixel lengths.
const PIXEL_PROPERTIES: [&str; 14] = [
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "width",
    "minWidth",
    "maxWidth",
    "height",
    "minHeight",
    "maxHeight",
];

/// Properties whose bare numbers are root-relative sizes.
const REM_PROPERTIES: [&str; 2] = ["fontSize", "lineHeight"];

/// Suffix bare numbers with `px` on box dimensions and `rem` on font size
/// and line height. Text, non-finite numbers and unlisted properties are
/// unchanged.
pub fn infer_units(mut declaration: Declaration) -> Declaration {
    let suffixes = PIXEL_PROPERTIES
        .iter()
        .map(|name| (*name, "px"))
        .chain(REM_PROPERTIES.iter().map(|name| (*name, "rem")));

    for (name, unit) in suffixes {
        match declaration.get(name) {
            Some(&Value::Number(n)) if n.is_finite() => {
                declaration.insert(name, format!("{}{unit}", Value::Number(n)));
            }
            _ => {}
        }
    }
    declaration
}
