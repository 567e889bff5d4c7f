//! A lookup table from keys to the data the tree doesn't carry, such as a
//! citizen's age keyed by their ID. Unlike [`Tree::contains`], looking up a
//! missing key here is an error.
//!
//! [`Tree::contains`]: crate::tree::Tree::contains
//!
//! # Examples
//!
//! ```
//! use ordered_tree::registry::Registry;
//!
//! let registry: Registry<u64, u8> = [(1781538447, 18)].into_iter().collect();
//!
//! assert_eq!(registry.get(&1781538447).unwrap(), &18);
//! assert!(registry.get(&1).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::Deserialize;
use tracing::warn;

use crate::error::Error;

/// Owns the mapping from key to auxiliary value.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Registry<K, V>
where
    K: Eq + Hash,
{
    entries: HashMap<K, V>,
}

impl<K, V> Default for Registry<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash,
{
    /// Adds or replaces the entry for `key`, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns the value stored for `key` or [`Error::UnknownKey`] if there
    /// isn't one.
    pub fn get(&self, key: &K) -> Result<&V, Error>
    where
        K: fmt::Display,
    {
        self.entries.get(key).ok_or_else(|| {
            warn!(%key, "registry lookup missed");
            Error::UnknownKey(key.to_string())
        })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Registry<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
