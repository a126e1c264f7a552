// Copyright 2025 Cowboy AI, LLC.

//! `Optional<T>`: a present/absent box.
//!
//! The combinators mirror the left-side operations of
//! [`Either`](crate::Either), with the absent side carrying no payload.
//! A present null payload (`Optional::some(None)`) is still present;
//! [`Optional::not_null`] is the explicit way to collapse it.

use std::fmt;

#[cfg(feature = "json-schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::either::Either;
use crate::lookup::Lookup;
use crate::repr::{Rendered, Repr};
use crate::truthiness::{Falsy, Nullable};

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(JsonSchema))]
#[serde(tag = "kind", content = "value")]
pub enum Optional<T> {
    /// Present value
    Some(T),
    /// Absent
    None,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> Optional<T> {
    /// Wrap a present value.
    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// The absent box.
    pub fn none() -> Self {
        Optional::None
    }

    /// Present when `predicate` accepts `candidate`; evaluated immediately.
    pub fn some_when<P>(candidate: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Optional::Some(candidate).filter_if(predicate)
    }

    /// Absent when `predicate` accepts `candidate`; evaluated immediately.
    pub fn none_when<P>(candidate: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Optional::Some(candidate).filter_if(|value| !predicate(value))
    }

    /// Present with a clone of `source[key]` when the key exists.
    pub fn from_mapping<S, K>(source: &S, key: &K) -> Self
    where
        S: Lookup<K, Value = T> + ?Sized,
        K: fmt::Display + ?Sized,
        T: Clone,
    {
        Either::from_mapping(source, key, ()).to_option_from_left()
    }

    /// Check if a value is present
    pub fn has_value(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Check if the box is absent
    pub fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// Borrow the value if present.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// The value, or `alt`.
    pub fn value_or(self, alt: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => alt,
        }
    }

    /// The value, or one produced by `f`.
    pub fn value_or_create<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => f(),
        }
    }

    /// `self` if present, otherwise a present box holding `alt`.
    pub fn or(self, alt: T) -> Self {
        match self {
            Optional::Some(_) => self,
            Optional::None => Optional::Some(alt),
        }
    }

    /// `self` if present, otherwise a present box holding `f()`.
    pub fn or_create<F>(self, f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(_) => self,
            Optional::None => Optional::Some(f()),
        }
    }

    /// `self` if present, otherwise `alt` as a whole.
    #[doc(alias = "else")]
    pub fn else_use(self, alt: Self) -> Self {
        match self {
            Optional::Some(_) => self,
            Optional::None => alt,
        }
    }

    /// `self` if present, otherwise the box produced by `f`.
    pub fn else_create<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Optional::Some(_) => self,
            Optional::None => f(),
        }
    }

    /// Fold into one value; exactly one function runs.
    #[doc(alias = "match")]
    pub fn fold<U, FS, FN>(self, on_some: FS, on_none: FN) -> U
    where
        FS: FnOnce(T) -> U,
        FN: FnOnce() -> U,
    {
        match self {
            Optional::Some(value) => on_some(value),
            Optional::None => on_none(),
        }
    }

    /// Run `f` on the value, if present.
    pub fn match_some<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        self.as_ref().fold(f, || ())
    }

    /// Run `f` if absent.
    pub fn match_none<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        self.as_ref().fold(|_| (), f)
    }

    /// Map over the value.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Map with a fallible callback; an `Err` propagates to the caller.
    pub fn try_map<U, X, F>(self, f: F) -> Result<Optional<U>, X>
    where
        F: FnOnce(T) -> Result<U, X>,
    {
        match self {
            Optional::Some(value) => f(value).map(Optional::Some),
            Optional::None => Ok(Optional::None),
        }
    }

    /// Map with a fallible callback; an `Err` becomes an absent box.
    ///
    /// The reason for the failure is dropped, since absence has no payload.
    pub fn map_safely<U, X, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Result<U, X>,
    {
        match self {
            Optional::Some(value) => match f(value) {
                Ok(mapped) => Optional::Some(mapped),
                Err(_) => {
                    debug!("callback failed in map_safely; dropping to none");
                    Optional::None
                }
            },
            Optional::None => Optional::None,
        }
    }

    /// Chain an optional-returning computation.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Alias of [`Optional::flat_map`].
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.flat_map(f)
    }

    /// Drop the value when `condition` is false.
    pub fn filter(self, condition: bool) -> Self {
        if condition {
            self
        } else {
            Optional::None
        }
    }

    /// Drop the value when `predicate` rejects it.
    pub fn filter_if<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(value) => {
                if predicate(&value) {
                    Optional::Some(value)
                } else {
                    Optional::None
                }
            }
            Optional::None => Optional::None,
        }
    }

    /// Drop a null payload.
    pub fn not_null(self) -> Self
    where
        T: Nullable,
    {
        self.filter_if(|value| !value.is_null())
    }

    /// Drop a falsy payload; see [`crate::truthiness`].
    pub fn not_falsy(self) -> Self
    where
        T: Falsy,
    {
        self.filter_if(|value| !value.is_falsy())
    }

    /// True when present with a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|inner| inner == value)
    }

    /// True when present and `predicate` accepts the value.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(value) => predicate(value),
            Optional::None => false,
        }
    }

    /// Left with the value, or right with `right` when absent.
    pub fn to_either<R>(self, right: R) -> Either<T, R> {
        self.fold(Either::Left, || Either::Right(right))
    }

    /// Convert into a std `Option`.
    pub fn into_option(self) -> Option<T> {
        self.fold(Some, || None)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T: Repr> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(value) => write!(f, "Some({})", Rendered(value)),
            Optional::None => f.write_str("None"),
        }
    }
}

impl<T: Repr> Repr for Optional<T> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
