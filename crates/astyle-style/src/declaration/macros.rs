//! The `style!` declaration macro.

/// Build a [`Declaration`](crate::Declaration).
///
/// Keys are string literals; a braced value builds a nested declaration.
///
/// ```
/// use astyle_style::{style, Value};
///
/// let declaration = style! {
///     "padding" => "4px 8px",
///     "fontSize" => 1.25,
///     ":hover" => {
///         "color" => "red",
///     },
/// };
///
/// assert_eq!(declaration.len(), 3);
/// assert_eq!(
///     declaration.get(":hover").and_then(Value::as_nested).and_then(|d| d.get("color")),
///     Some(&Value::from("red")),
/// );
/// ```
#[macro_export]
macro_rules! style {
    (@entries $declaration:ident;) => {};
    (@entries $declaration:ident; $key:literal => { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $declaration.insert($key, $crate::Value::Nested($crate::style!($($inner)*)));
        $crate::style!(@entries $declaration; $($($rest)*)?);
    };
    (@entries $declaration:ident; $key:literal => $value:expr $(, $($rest:tt)*)?) => {
        $declaration.insert($key, $crate::Value::from($value));
        $crate::style!(@entries $declaration; $($($rest)*)?);
    };
    ($($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut declaration = $crate::Declaration::new();
        $crate::style!(@entries declaration; $($body)*);
        declaration
    }};
}
