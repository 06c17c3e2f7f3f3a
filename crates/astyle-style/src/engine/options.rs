//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::transform::{Transform, TransformPipeline};

/// How compiled declarations are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionMode {
    /// Hash declarations into class identifiers and write rules to the sink.
    #[default]
    Inject,
    /// Write nothing; compiling returns the declaration's own values.
    #[serde(alias = "no-op")]
    Noop,
    /// Compile as `Inject`; the consumer applies values as inline styles.
    Inline,
}

impl InjectionMode {
    /// The mode's configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InjectionMode::Inject => "inject",
            InjectionMode::Noop => "noop",
            InjectionMode::Inline => "inline",
        }
    }
}

impl fmt::Display for InjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InjectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inject" => Ok(Self::Inject),
            "noop" | "no-op" => Ok(Self::Noop),
            "inline" => Ok(Self::Inline),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Options for constructing a [`Styler`](crate::Styler).
///
/// Defaults to [`InjectionMode::Inject`] with no transforms. Only the mode
/// is read when deserializing; transforms are code and are added with
/// [`with_transform`](Self::with_transform).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StylerOptions {
    /// Injection mode.
    pub mode: InjectionMode,
    /// Transforms applied before hashing.
    #[serde(skip)]
    pub transforms: TransformPipeline,
}

impl StylerOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the injection mode.
    pub fn with_mode(mut self, mode: InjectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Append a transform.
    pub fn with_transform(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Append box-shorthand expansion and unit inference.
    pub fn with_standard_transforms(mut self) -> Self {
        self.transforms.push(crate::transform::expand_box_shorthand);
        self.transforms.push(crate::transform::infer_units);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<InjectionMode, Error> {
        s.parse()
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(parse("inject"), Ok(InjectionMode::Inject));
        assert_eq!(parse("NoOp"), Ok(InjectionMode::Noop));
        assert_eq!(parse("no-op"), Ok(InjectionMode::Noop));
        assert_eq!(parse(" inline "), Ok(InjectionMode::Inline));
        assert_eq!(parse("eager"), Err(Error::InvalidMode("eager".into())));
    }

    #[test]
    fn mode_display_round_trips() {
        let modes = [
            InjectionMode::Inject,
            InjectionMode::Noop,
            InjectionMode::Inline,
        ];
        for mode in modes {
            assert_eq!(mode.to_string().parse::<InjectionMode>().unwrap(), mode);
        }
    }

    #[test]
    fn options_from_json() {
        let options: StylerOptions = serde_json::from_str(r#"{"mode": "no-op"}"#).unwrap();
        assert_eq!(options.mode, InjectionMode::Noop);
        assert!(options.transforms.is_empty());

        let options: StylerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.mode, InjectionMode::Inject);
    }

    #[test]
    fn builder() {
        let options = StylerOptions::new()
            .with_mode(InjectionMode::Inline)
            .with_standard_transforms();
        assert_eq!(options.mode, InjectionMode::Inline);
        assert_eq!(options.transforms.len(), 2);
    }
}
