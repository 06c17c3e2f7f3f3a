//! Box-shorthand expansion.

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::{Declaration, Value};

/// Shorthand properties expanded into four sides, as
/// `(shorthand, longhand prefix, longhand suffix)`.
const BOX_SHORTHANDS: [(&str, &str, &str); 5] = [
    ("borderColor", "border", "Color"),
    ("borderStyle", "border", "Style"),
    ("borderWidth", "border", "Width"),
    ("margin", "margin", ""),
    ("padding", "padding", ""),
];

const SIDES: [&str; 4] = ["Top", "Right", "Bottom", "Left"];

/// Expand `margin`, `padding`, `borderColor`, `borderWidth` and
/// `borderStyle` into their Top/Right/Bottom/Left longhands.
///
/// Text values are split on whitespace outside parentheses and assigned with
/// the usual CSS arity rules. A number applies to all four sides. Any other
/// value is left in place unexpanded.
pub fn expand_box_shorthand(mut declaration: Declaration) -> Declaration {
    for (name, prefix, suffix) in BOX_SHORTHANDS {
        let parts = match declaration.get(name) {
            Some(Value::Number(n)) if n.is_finite() => vec![Value::Number(*n)],
            Some(Value::Text(text)) => split_shorthand(text)
                .into_iter()
                .map(Value::Text)
                .collect(),
            _ => continue,
        };
        declaration.remove(name);

        for (side, value) in SIDES.iter().zip(sides(&parts)) {
            declaration.insert(format!("{prefix}{side}{suffix}"), value.clone());
        }
    }
    declaration
}

/// Pick the top/right/bottom/left values from one to four parts.
fn sides(parts: &[Value]) -> [&Value; 4] {
    static EMPTY: Value = Value::Null;
    let first = parts.first().unwrap_or(&EMPTY);
    let top = first;
    let right = parts.get(1).unwrap_or(first);
    let bottom = parts.get(2).unwrap_or(first);
    let left = parts.get(3).unwrap_or(right);
    [top, right, bottom, left]
}

/// Split a shorthand value into its space-separated components.
///
/// Functional notation such as `rgba(0, 0, 0, 0.5)` stays one component.
/// A blank value yields a single empty component.
///
/// ```
/// use astyle_style::transform::split_shorthand;
///
/// assert_eq!(split_shorthand("1px rgba(0, 0, 0, 0.5)"), vec!["1px", "rgba(0, 0, 0, 0.5)"]);
/// ```
pub fn split_shorthand(value: &str) -> Vec<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut parts = Vec::new();
    let mut start = None;

    loop {
        let before = parser.position();
        let (is_whitespace, opens_block) = match parser.next_including_whitespace() {
            Ok(token) => (
                matches!(token, Token::WhiteSpace(_)),
                matches!(
                    token,
                    Token::Function(_)
                        | Token::ParenthesisBlock
                        | Token::SquareBracketBlock
                        | Token::CurlyBracketBlock
                ),
            ),
            Err(_) => break,
        };

        if is_whitespace {
            if let Some(start) = start.take() {
                parts.push(parser.slice(start..before).to_string());
            }
            continue;
        }

        if start.is_none() {
            start = Some(before);
        }
        if opens_block {
            // Consume the block so the next position is past its close.
            let _ = parser.parse_nested_block(skip_block);
        }
    }

    if let Some(start) = start {
        parts.push(parser.slice_from(start).to_string());
    }
    if parts.is_empty() {
        parts.push(String::new());
    }
    parts
}

fn skip_block<'i>(nested: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    while nested.next_including_whitespace().is_ok() {}
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(name: &str, value: impl Into<Value>) -> Declaration {
        expand_box_shorthand(Declaration::new().with(name, value))
    }

    fn texts(declaration: &Declaration) -> Vec<(String, String)> {
        declaration
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn one_value() {
        assert_eq!(
            texts(&expanded("margin", "10px")),
            pairs(&[
                ("marginTop", "10px"),
                ("marginRight", "10px"),
                ("marginBottom", "10px"),
                ("marginLeft", "10px"),
            ])
        );
    }

    #[test]
    fn two_values() {
        assert_eq!(
            texts(&expanded("margin", "10px 5px")),
            pairs(&[
                ("marginTop", "10px"),
                ("marginRight", "5px"),
                ("marginBottom", "10px"),
                ("marginLeft", "5px"),
            ])
        );
    }

    #[test]
    fn three_values() {
        assert_eq!(
            texts(&expanded("padding", "1px 2px 3px")),
            pairs(&[
                ("paddingTop", "1px"),
                ("paddingRight", "2px"),
                ("paddingBottom", "3px"),
                ("paddingLeft", "2px"),
            ])
        );
    }

    #[test]
    fn four_values() {
        assert_eq!(
            texts(&expanded("margin", "10px 5px 2px 1px")),
            pairs(&[
                ("marginTop", "10px"),
                ("marginRight", "5px"),
                ("marginBottom", "2px"),
                ("marginLeft", "1px"),
            ])
        );
    }

    #[test]
    fn functional_notation_is_one_token() {
        assert_eq!(
            texts(&expanded("borderColor", "rgba(1, 2, 3, 1)")),
            pairs(&[
                ("borderTopColor", "rgba(1, 2, 3, 1)"),
                ("borderRightColor", "rgba(1, 2, 3, 1)"),
                ("borderBottomColor", "rgba(1, 2, 3, 1)"),
                ("borderLeftColor", "rgba(1, 2, 3, 1)"),
            ])
        );
    }

    #[test]
    fn numbers_apply_to_every_side() {
        let out = expanded("borderWidth", 2);
        for side in ["borderTopWidth", "borderRightWidth", "borderBottomWidth", "borderLeftWidth"] {
            assert_eq!(out.get(side), Some(&Value::Number(2.0)), "{side}");
        }
    }

    #[test]
    fn other_values_pass_through() {
        let nested = Declaration::new().with("x", 1);
        let declaration = Declaration::new()
            .with("margin", nested.clone())
            .with("padding", None::<&str>);

        let out = expand_box_shorthand(declaration.clone());
        assert_eq!(out, declaration);
    }

    #[test]
    fn unrelated_properties_keep_their_place() {
        let declaration = Declaration::new()
            .with("color", "red")
            .with("borderStyle", "solid dashed")
            .with("width", 3);

        let out = expand_box_shorthand(declaration);
        assert_eq!(
            out.keys().collect::<Vec<_>>(),
            vec![
                "color",
                "width",
                "borderTopStyle",
                "borderRightStyle",
                "borderBottomStyle",
                "borderLeftStyle",
            ]
        );
    }

    #[test]
    fn shorthand_overrides_existing_longhand() {
        let declaration = Declaration::new()
            .with("marginTop", "1px")
            .with("margin", "2px");
        let out = expand_box_shorthand(declaration);

        assert_eq!(out.keys().next(), Some("marginTop"));
        assert_eq!(out.get("marginTop"), Some(&Value::from("2px")));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn split_components() {
        assert_eq!(split_shorthand("10px"), vec!["10px"]);
        assert_eq!(split_shorthand("  10px   auto "), vec!["10px", "auto"]);
        assert_eq!(
            split_shorthand("calc(100% - 4px) 0 var(--gap, 2px)"),
            vec!["calc(100% - 4px)", "0", "var(--gap, 2px)"]
        );
        assert_eq!(split_shorthand(""), vec![""]);
    }
}
