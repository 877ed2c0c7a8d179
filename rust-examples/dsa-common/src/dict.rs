//! # Insertion-Ordered Dictionaries
//!
//! A key-unique mapping whose enumeration follows insertion order, built from
//! two persistent `im` collections: an `im::HashMap` for O(log n) lookup and an
//! `im::Vector` that remembers the order keys first arrived in.
//!
//! ## Ordering rules
//!
//! - A new key goes to the end.
//! - Updating an existing key keeps its position.
//! - Deleting a key drops it from the order; re-inserting it later appends it.
//!
//! Cloning a [`Dict`] is O(1) thanks to structural sharing, so snapshots of a
//! record at each step of a walkthrough are cheap.
//!
//! ## Example
//!
//! ```
//! use dsa_common::dict::Dict;
//!
//! let mut person: Dict<&str, i64> = Dict::new();
//! person.set("age", 25);
//! person.set("height", 170);
//! person.set("age", 26);
//!
//! assert_eq!(person.get("age"), Some(&26));
//! assert_eq!(person.keys().copied().collect::<Vec<_>>(), vec!["age", "height"]);
//!
//! assert_eq!(person.pop("height"), Ok(170));
//! assert!(person.delete("height").is_err());
//! ```

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use im::{HashMap as ImHashMap, Vector};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{CollectionError, Result};

/// A key-unique mapping that enumerates in insertion order.
#[derive(Debug, Clone)]
pub struct Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    /// Current bindings
    entries: ImHashMap<K, V>,
    /// Keys in the order they were first inserted
    order: Vector<K>,
}

impl<K, V> Default for Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ImHashMap::new(),
            order: Vector::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Looks up a key, returning `None` when it is absent.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Looks up a key, falling back to `default` when it is absent.
    ///
    /// # Example
    /// ```
    /// use dsa_common::dict::Dict;
    /// let scores: Dict<String, u32> = [("ann".to_string(), 3)].into_iter().collect();
    /// assert_eq!(scores.get_or("ann", 0), 3);
    /// assert_eq!(scores.get_or("bob", 0), 0);
    /// ```
    #[must_use]
    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).cloned().unwrap_or(default)
    }

    /// Subscript access: like [`Dict::get`] but absence is an error.
    ///
    /// # Errors
    /// [`CollectionError::KeyNotFound`] when the key is absent.
    pub fn index<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.entries.get(key).ok_or_else(|| key_not_found(key))
    }

    /// Inserts or updates a binding and returns the previous value, if any.
    ///
    /// An update keeps the key's original position.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.entries.insert(key.clone(), value);
        if previous.is_none() {
            self.order.push_back(key);
        }
        previous
    }

    /// Removes a binding.
    ///
    /// # Errors
    /// [`CollectionError::KeyNotFound`] when the key is absent.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.pop(key).map(|_| ())
    }

    /// Removes a binding and returns its value.
    ///
    /// # Errors
    /// [`CollectionError::KeyNotFound`] when the key is absent.
    pub fn pop<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let value = self.entries.remove(key).ok_or_else(|| key_not_found(key))?;
        if let Some(position) = self
            .order
            .iter()
            .position(|k| <K as Borrow<Q>>::borrow(k) == key)
        {
            self.order.remove(position);
        }
        Ok(value)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Values in insertion order of their keys.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.items().map(|(_, v)| v)
    }

    /// `(key, value)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(move |k| self.entries.get(k).map(|v| (k, v)))
    }
}

fn key_not_found<Q: Debug + ?Sized>(key: &Q) -> CollectionError {
    CollectionError::KeyNotFound {
        key: format!("{key:?}"),
    }
}

impl<K, V> FromIterator<(K, V)> for Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V> Extend<(K, V)> for Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Two dictionaries are equal when they hold the same bindings in the same order.
impl<K, V> PartialEq for Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items().eq(other.items())
    }
}

impl<K, V> Eq for Dict<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone + Eq,
{
}

/// Serializes as a map whose entries follow insertion order.
impl<K, V> Serialize for Dict<K, V>
where
    K: Clone + Hash + Eq + Serialize,
    V: Clone + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.items() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
