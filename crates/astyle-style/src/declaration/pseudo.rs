//! Recognized pseudo-selector keys.

use std::fmt;

/// A pseudo-selector that may key a nested declaration.
///
/// Only these keys introduce a variant block; any other key is treated as a
/// plain property even when it starts with `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pseudo {
    /// `:link`
    Link,
    /// `:focus-within`
    FocusWithin,
    /// `:first-child`
    FirstChild,
    /// `:last-child`
    LastChild,
    /// `:odd-child`
    OddChild,
    /// `:even-child`
    EvenChild,
    /// `:hover`
    Hover,
    /// `:focus`
    Focus,
    /// `:active`
    Active,
    /// `:visited`
    Visited,
    /// `:disabled`
    Disabled,
}

impl Pseudo {
    /// Every recognized pseudo-selector.
    pub const ALL: [Pseudo; 11] = [
        Pseudo::Link,
        Pseudo::FocusWithin,
        Pseudo::FirstChild,
        Pseudo::LastChild,
        Pseudo::OddChild,
        Pseudo::EvenChild,
        Pseudo::Hover,
        Pseudo::Focus,
        Pseudo::Active,
        Pseudo::Visited,
        Pseudo::Disabled,
    ];

    /// The declaration key, including the leading colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pseudo::Link => ":link",
            Pseudo::FocusWithin => ":focus-within",
            Pseudo::FirstChild => ":first-child",
            Pseudo::LastChild => ":last-child",
            Pseudo::OddChild => ":odd-child",
            Pseudo::EvenChild => ":even-child",
            Pseudo::Hover => ":hover",
            Pseudo::Focus => ":focus",
            Pseudo::Active => ":active",
            Pseudo::Visited => ":visited",
            Pseudo::Disabled => ":disabled",
        }
    }

    /// Look up a declaration key. Matching is exact.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pseudo| pseudo.as_str() == key)
    }
}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for pseudo in Pseudo::ALL {
            assert_eq!(Pseudo::from_key(pseudo.as_str()), Some(pseudo));
        }
    }

    #[test]
    fn unknown_keys() {
        assert_eq!(Pseudo::from_key(":nth-child(2)"), None);
        assert_eq!(Pseudo::from_key("hover"), None);
        assert_eq!(Pseudo::from_key(":HOVER"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Pseudo::FocusWithin.to_string(), ":focus-within");
    }
}
