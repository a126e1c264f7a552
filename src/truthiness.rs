// Copyright 2025 Cowboy AI, LLC.

//! Explicit null and falsy predicates.
//!
//! Payloads are typed, so "null" and "falsy" have to be spelled out per type
//! instead of coming from a language-level coercion.
//!
//! [`Nullable::is_null`] holds for exactly:
//! - `None`
//! - `()`
//! - `serde_json::Value::Null`
//!
//! [`Falsy::is_falsy`] holds for exactly:
//! - `false`
//! - numeric zero of every integer and float type (`0`, `0.0`, `-0.0`)
//! - the empty string
//! - empty collections: slices, arrays, `Vec`, `VecDeque`, `HashMap`,
//!   `BTreeMap`, `HashSet`, `BTreeSet`, `IndexMap`, `IndexSet`
//! - `()` and `None`; `Some(v)` is falsy iff `v` is
//! - `serde_json::Value`: `Null`, `false`, zero, `""`, `[]` and `{}`
//!
//! The string `"0"` is not falsy, and neither is `"false"`. Strings are never
//! parsed for truthiness: a non-empty string is truthy whatever it spells.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// Types with a distinguished "null" value.
pub trait Nullable {
    /// True when this is the null representation of the type.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for () {
    fn is_null(&self) -> bool {
        true
    }
}

impl Nullable for Value {
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Types with a loose "falsy" notion; see the module docs for the exact set.
pub trait Falsy {
    /// True when the value counts as absent under loose truthiness.
    fn is_falsy(&self) -> bool;
}

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

macro_rules! falsy_when_zero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Falsy for $ty {
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

falsy_when_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Falsy for f32 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for f64 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for () {
    fn is_falsy(&self) -> bool {
        true
    }
}

impl<T: Falsy> Falsy for Option<T> {
    fn is_falsy(&self) -> bool {
        self.as_ref().map_or(true, Falsy::is_falsy)
    }
}

impl<T> Falsy for [T] {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Falsy for [T; N] {
    fn is_falsy(&self) -> bool {
        N == 0
    }
}

macro_rules! falsy_when_empty {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Falsy for $ty<$($param),+> {
                fn is_falsy(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

falsy_when_empty!(
    Vec<T>,
    VecDeque<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    BTreeSet<T>,
    IndexMap<K, V, S>,
    IndexSet<T, S>,
);

impl Falsy for Value {
    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T: Falsy + ?Sized> Falsy for Box<T> {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}
