//! Inline-style dictionaries.
//!
//! Word-units, wrappers and the drawing surface all carry small inline
//! style dictionaries (property name → value). The only operation with
//! real semantics is the shallow merge: overlay keys win over base keys,
//! key by key, and nothing is validated here — values travel verbatim to
//! whatever renders them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An inline-style dictionary (property name → value).
///
/// Property names are free-form strings (`"background-color"`,
/// `"display"`, …); this crate never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Remove every property (the `style.cssText = ""` analogue).
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(property, value)` pairs in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Shallow merge: every key of `overlay` overwrites the same key in
    /// `self`; keys only present in `self` are kept.
    pub fn apply(&mut self, overlay: &StyleMap) {
        for (k, v) in overlay.iter() {
            self.0.insert(k.to_string(), v.to_string());
        }
    }

    /// Merge two dictionaries into a new one, `overlay` keys winning.
    pub fn merged(base: &StyleMap, overlay: &StyleMap) -> StyleMap {
        let mut out = base.clone();
        out.apply(overlay);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_overlay_key_wins() {
        let base: StyleMap = [("background-color", "yellow"), ("display", "inline")]
            .into_iter()
            .collect();
        let overlay: StyleMap = [("background-color", "red")].into_iter().collect();
        let merged = StyleMap::merged(&base, &overlay);
        assert_eq!(merged.get("background-color"), Some("red"));
        assert_eq!(merged.get("display"), Some("inline"));
    }

    #[test]
    fn merged_keeps_base_untouched() {
        let base: StyleMap = [("color", "black")].into_iter().collect();
        let overlay: StyleMap = [("color", "white")].into_iter().collect();
        let _ = StyleMap::merged(&base, &overlay);
        assert_eq!(base.get("color"), Some("black"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut style: StyleMap = [("a", "1"), ("b", "2")].into_iter().collect();
        style.clear();
        assert!(style.is_empty());
    }
}
