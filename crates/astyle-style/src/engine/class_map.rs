//! Class identifier maps and composition.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from attribute keys (`property` or `property:pseudo`) to
/// generated class identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassMap {
    classes: IndexMap<String, String>,
}

impl ClassMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class for an attribute key.
    pub fn insert(&mut self, key: impl Into<String>, class: impl Into<String>) -> Option<String> {
        self.classes.insert(key.into(), class.into())
    }

    /// Get the class for an attribute key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.classes.get(key).map(String::as_str)
    }

    /// Check if an attribute key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.classes.contains_key(key)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over `(key, class)` entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over classes in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.values().map(String::as_str)
    }

    /// Copy every entry of `other` into this map, overwriting on collision.
    pub fn merge(&mut self, other: &ClassMap) {
        for (key, class) in &other.classes {
            self.classes.insert(key.clone(), class.clone());
        }
    }

    /// The space-separated class list.
    ///
    /// Identical classes under different keys are repeated.
    pub fn class_names(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for ClassMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_names())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Merge class maps left to right; later maps win on key collisions.
///
/// `None` entries are skipped, so conditional maps compose directly:
///
/// ```
/// use astyle_style::{compose, ClassMap};
///
/// let base: ClassMap = [("a", "1")].into_iter().collect();
/// let over: ClassMap = [("a", "2"), ("b", "3")].into_iter().collect();
/// let active = false;
///
/// let merged = compose([Some(&base), active.then_some(&over)]);
/// assert_eq!(merged, base);
///
/// let merged = compose([&base, &over]);
/// assert_eq!(merged.get("a"), Some("2"));
/// ```
pub fn compose<'a, I, M>(maps: I) -> ClassMap
where
    I: IntoIterator<Item = M>,
    M: Into<Option<&'a ClassMap>>,
{
    let mut merged = ClassMap::new();
    for map in maps {
        let map: Option<&ClassMap> = map.into();
        if let Some(map) = map {
            merged.merge(map);
        }
    }
    merged
}

/// [`compose`], then join the classes with single spaces.
pub fn cx<'a, I, M>(maps: I) -> String
where
    I: IntoIterator<Item = M>,
    M: Into<Option<&'a ClassMap>>,
{
    compose(maps).class_names()
}
