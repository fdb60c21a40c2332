// SPDX-License-Identifier: MPL-2.0
//! Insertion-ordered key to text mapping.
//!
//! Entries keep the order in which keys were first inserted; overwriting a
//! key replaces its value in place. Writing a map back to disk therefore
//! reproduces the order of the file it was read from.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TranslationMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Copies every entry of `other` on top of this map, key by key.
    pub fn merge(&mut self, other: TranslationMap) {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl PartialEq for TranslationMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TranslationMap {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TranslationMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for TranslationMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut map: TranslationMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        let previous = map.insert("b", "two");

        assert_eq!(previous.as_deref(), Some("2"));
        assert_eq!(map.len(), 3);
        let entries: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(entries, vec![("a", "1"), ("b", "two"), ("c", "3")]);
    }

    #[test]
    fn merge_overrides_and_appends() {
        let mut base: TranslationMap = [("Yes", "Yes"), ("No", "No")].into_iter().collect();
        let top: TranslationMap = [("No", "Nein"), ("Cancel", "Abbrechen")].into_iter().collect();
        base.merge(top);

        assert_eq!(base.get("Yes"), Some("Yes"));
        assert_eq!(base.get("No"), Some("Nein"));
        assert_eq!(base.get("Cancel"), Some("Abbrechen"));
        let keys: Vec<&str> = base.keys().collect();
        assert_eq!(keys, vec!["Yes", "No", "Cancel"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: TranslationMap = [("a", "1"), ("b", "2")].into_iter().collect();
        let ba: TranslationMap = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn clear_empties_lookup_index() {
        let mut map: TranslationMap = [("a", "1")].into_iter().collect();
        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key("a"));
        assert_eq!(map.get("a"), None);
    }
}
