// Copyright 2025 Cowboy AI, LLC.

//! Keyed sources for the `from_mapping` constructors.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Something a value can be fetched from by key.
pub trait Lookup<K: ?Sized> {
    /// Stored value type
    type Value;

    /// Borrow the value stored under `key`, if any.
    fn lookup(&self, key: &K) -> Option<&Self::Value>;
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q, S> Lookup<Q> for IndexMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<V> Lookup<usize> for [V] {
    type Value = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl<V> Lookup<usize> for Vec<V> {
    type Value = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl Lookup<str> for Map<String, Value> {
    type Value = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Objects are keyed by field name; anything else has no keys.
impl Lookup<str> for Value {
    type Value = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

/// Arrays are keyed by position; anything else has no keys.
impl Lookup<usize> for Value {
    type Value = Value;

    fn lookup(&self, key: &usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(*key))
    }
}
