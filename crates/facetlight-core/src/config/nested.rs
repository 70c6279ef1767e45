//! Ordered configuration containers with a default-value factory.
//!
//! A [`NestedConfig`] behaves like an insertion-ordered map whose missing
//! entries are generated on demand. It is used while building configuration
//! (before the registry is frozen), where code like
//! `config.facet_field("format").label = ...` should simply work.
//!
//! Cloning is always deep: the copy owns its own entries and shares only
//! the (immutable) default factory, so it keeps auto-populating unset keys
//! exactly like the original.
//!
//! ```rust
//! use facetlight_core::NestedConfig;
//!
//! let nested: NestedConfig<NestedConfig<u32>> =
//!     NestedConfig::new(|_| NestedConfig::new(|_| 0));
//!
//! let mut copy = nested.deep_clone();
//! *copy.fetch("a").fetch("b") = 1;
//!
//! assert_eq!(copy.get("a").and_then(|a| a.get("b")), Some(&1));
//! assert!(nested.get("a").is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::field::FieldConfig;

/// Factory producing a default value for a missing key.
pub type DefaultFactory<T> = Arc<dyn Fn(&str) -> T + Send + Sync>;

/// Insertion-ordered map with a default-value factory.
pub struct NestedConfig<T> {
    entries: Vec<(String, T)>,
    default: DefaultFactory<T>,
}

impl<T> NestedConfig<T> {
    /// Create an empty container with the given default factory.
    pub fn new<F>(default: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Self {
            entries: Vec::new(),
            default: Arc::new(default),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Get an entry without populating it.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Get a mutable entry without populating it.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.position(key).map(|i| &mut self.entries[i].1)
    }

    /// Get an entry, inserting the factory default if it is missing.
    pub fn fetch(&mut self, key: &str) -> &mut T {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                let value = (self.default)(key);
                self.entries.push((key.to_string(), value));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Add a key populated by the default factory.
    ///
    /// Existing entries are left untouched.
    pub fn push_key(&mut self, key: &str) -> &mut T {
        self.fetch(key)
    }

    /// Insert or replace an entry, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove an entry.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Build the default value for a key without inserting it.
    pub fn default_for(&self, key: &str) -> T {
        (self.default)(key)
    }

    /// Returns `true` if the key has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> NestedConfig<T> {
    /// Copy every entry and keep the default factory.
    ///
    /// Element values are cloned through their own `Clone`, so nested
    /// containers are deep-copied along with their factories.
    pub fn deep_clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            default: Arc::clone(&self.default),
        }
    }
}

impl<T: Clone> Clone for NestedConfig<T> {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

impl NestedConfig<FieldConfig> {
    /// Container for facet fields: missing keys become `FieldConfig::new(key)`.
    pub fn for_fields() -> Self {
        Self::new(|key| FieldConfig::new(key))
    }
}

impl Default for NestedConfig<FieldConfig> {
    fn default() -> Self {
        Self::for_fields()
    }
}

impl<T: fmt::Debug> fmt::Debug for NestedConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<T: PartialEq> PartialEq for NestedConfig<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_populates_missing_key() {
        let mut nested: NestedConfig<Vec<String>> = NestedConfig::new(|_| Vec::new());
        nested.fetch("a").push("x".to_string());
        assert_eq!(nested.get("a"), Some(&vec!["x".to_string()]));
        assert_eq!(nested.len(), 1);
    }

    #[test]
    fn test_get_does_not_populate() {
        let nested: NestedConfig<u32> = NestedConfig::new(|_| 7);
        assert!(nested.get("missing").is_none());
        assert!(nested.is_empty());
        assert_eq!(nested.default_for("missing"), 7);
    }

    #[test]
    fn test_push_key_builds_field_config() {
        let mut fields = NestedConfig::for_fields();
        fields.push_key("blah");
        assert_eq!(fields.get("blah").unwrap().key, "blah");
    }

    #[test]
    fn test_push_key_keeps_existing_entry() {
        let mut fields = NestedConfig::for_fields();
        fields.insert("format", FieldConfig::new("format").with_label("Format"));
        fields.push_key("format");
        assert_eq!(fields.get("format").unwrap().label.as_deref(), Some("Format"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut nested: NestedConfig<u32> = NestedConfig::new(|_| 0);
        nested.insert("z", 1);
        nested.insert("a", 2);
        nested.insert("m", 3);
        nested.insert("z", 4);
        assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(nested.get("z"), Some(&4));
    }

    #[test]
    fn test_remove() {
        let mut nested: NestedConfig<u32> = NestedConfig::new(|_| 0);
        nested.insert("a", 1);
        assert_eq!(nested.remove("a"), Some(1));
        assert!(!nested.contains_key("a"));
        assert_eq!(nested.remove("a"), None);
    }

    // ------------------------------------------------------------------------
    // deep_clone tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_deep_clone_preserves_type_and_entries() {
        let mut fields = NestedConfig::for_fields();
        fields.push_key("format");

        let copy: NestedConfig<FieldConfig> = fields.deep_clone();
        assert_eq!(copy, fields);
    }

    #[test]
    fn test_deep_clone_preserves_default_factory() {
        let nested: NestedConfig<NestedConfig<u32>> =
            NestedConfig::new(|_| NestedConfig::new(|_| 0));

        let mut copy = nested.deep_clone();
        *copy.fetch("a").fetch("b") = 1;

        assert_eq!(copy.get("a").unwrap().get("b"), Some(&1));
        // Unset keys in the copy still auto-populate from the original rule.
        assert_eq!(*copy.fetch("a").fetch("c"), 0);
        assert_eq!(*copy.fetch("new").fetch("x"), 0);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let mut original: NestedConfig<NestedConfig<u32>> =
            NestedConfig::new(|_| NestedConfig::new(|_| 0));
        *original.fetch("a").fetch("b") = 1;

        let mut copy = original.deep_clone();
        *copy.fetch("a").fetch("b") = 2;
        copy.fetch("fresh");

        assert_eq!(original.get("a").unwrap().get("b"), Some(&1));
        assert!(!original.contains_key("fresh"));
    }
}
