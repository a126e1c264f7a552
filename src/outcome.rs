// Copyright 2025 Cowboy AI, LLC.

//! `Outcome<T, E>`: a success/failure box over [`Either`].
//!
//! Success is the left side and failure the right side of the wrapped
//! union; nearly every operation delegates to the matching left-side
//! combinator of [`Either`]. The error type defaults to [`ErrorValue`]
//! (message or captured fault). [`StrictOutcome`](crate::StrictOutcome)
//! pins it to [`Fault`].

use std::fmt;

#[cfg(feature = "json-schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::either::Either;
use crate::errors::ErrorValue;
use crate::fault::Fault;
use crate::lookup::Lookup;
use crate::optional::Optional;
use crate::repr::{Rendered, Repr};
use crate::truthiness::{Falsy, Nullable};

/// Success (`Okay`) or failure (`Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Outcome<T, E = ErrorValue>(Either<T, E>);

impl<T, E> Outcome<T, E> {
    /// Successful outcome.
    pub fn okay(data: T) -> Self {
        Outcome(Either::Left(data))
    }

    /// Failed outcome.
    pub fn error(error: impl Into<E>) -> Self {
        Outcome(Either::Right(error.into()))
    }

    /// Wrap a union whose left side is the success payload.
    pub fn from_either(either: Either<T, E>) -> Self {
        Outcome(either)
    }

    /// Okay when `predicate` accepts `candidate`, else `error`. Evaluated immediately.
    pub fn okay_when<P>(candidate: T, error: impl Into<E>, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Outcome(Either::left_when(candidate, error.into(), predicate))
    }

    /// Error when `predicate` accepts `candidate`, else okay with `data`.
    pub fn error_when<P>(candidate: impl Into<E>, data: T, predicate: P) -> Self
    where
        P: FnOnce(&E) -> bool,
    {
        Outcome(Either::right_when(candidate.into(), data, predicate))
    }

    /// Okay with `candidate` unless it is null.
    pub fn okay_not_null(candidate: T, error: impl Into<E>) -> Self
    where
        T: Nullable,
    {
        Self::okay(candidate).not_null(error.into())
    }

    /// Okay with a clone of `source[key]`, or `error` when the key is missing.
    pub fn from_mapping<S, K>(source: &S, key: &K, error: impl Into<E>) -> Self
    where
        S: Lookup<K, Value = T> + ?Sized,
        K: fmt::Display + ?Sized,
        T: Clone,
    {
        Outcome(Either::from_mapping(source, key, error.into()))
    }

    /// Like [`Outcome::from_mapping`], failing with a missing-key [`Fault`].
    pub fn from_mapping_or_fault<S, K>(source: &S, key: &K) -> Self
    where
        S: Lookup<K, Value = T> + ?Sized,
        K: fmt::Display + ?Sized,
        T: Clone,
        E: From<Fault>,
    {
        Outcome(Either::from_mapping_or_fault(source, key))
    }

    /// Check if this is a success
    pub fn is_okay(&self) -> bool {
        self.0.is_left()
    }

    /// Check if this is a failure
    pub fn is_error(&self) -> bool {
        self.0.is_right()
    }

    /// Borrow the wrapped union.
    pub fn as_either(&self) -> &Either<T, E> {
        &self.0
    }

    /// Unwrap into the underlying union.
    pub fn into_either(self) -> Either<T, E> {
        self.0
    }

    /// The data, or `alt`.
    pub fn data_or(self, alt: T) -> T {
        self.0.left_or(alt)
    }

    /// The error, or `alt`.
    pub fn error_or(self, alt: E) -> E {
        self.0.right_or(alt)
    }

    /// The data, or data computed from the error.
    pub fn data_or_return<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.0.left_or_create(f)
    }

    /// `self` if okay, otherwise okay with `data`.
    pub fn or_set_data_to(self, data: T) -> Self {
        Outcome(self.0.or_left(data))
    }

    /// `self` if okay, otherwise okay with data computed from the error.
    pub fn or_create_result_with_data<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        Outcome(self.0.or_create_left(f))
    }

    /// `self` if okay, otherwise `alt` as a whole.
    pub fn okay_or(self, alt: Self) -> Self {
        Outcome(self.0.else_left(alt.0))
    }

    /// `self` if okay, otherwise the outcome built from the error.
    pub fn create_if_error<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        Outcome(self.0.else_create_left(|e| f(e).0))
    }

    /// Fold into one value; exactly one function runs.
    #[doc(alias = "match")]
    pub fn run<U, FO, FE>(self, on_okay: FO, on_error: FE) -> U
    where
        FO: FnOnce(T) -> U,
        FE: FnOnce(E) -> U,
    {
        self.0.fold(on_okay, on_error)
    }

    /// Run `f` on the data, if okay.
    pub fn run_on_okay<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        self.0.match_left(f)
    }

    /// Run `f` on the error, if failed.
    pub fn run_on_error<F>(&self, f: F)
    where
        F: FnOnce(&E),
    {
        self.0.match_right(f)
    }

    /// Map over the data.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome(self.0.map_left(f))
    }

    /// Map with a fallible callback; an `Err` propagates to the caller.
    pub fn try_map<U, X, F>(self, f: F) -> Result<Outcome<U, E>, X>
    where
        F: FnOnce(T) -> Result<U, X>,
    {
        self.0.try_map_left(f).map(Outcome)
    }

    /// Map with a fallible callback; an `Err` becomes the new error.
    pub fn map_safely<U, X, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, X>,
        X: Into<E>,
    {
        Outcome(self.0.map_left_safely(f))
    }

    /// Map over the error.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        Outcome(self.0.map_right(f))
    }

    /// Chain an outcome-returning computation on the data.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        Outcome(self.0.flat_map_left(|data| f(data).0))
    }

    /// Alias of [`Outcome::and_then`].
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(f)
    }

    /// Turn an okay outcome into `error`. An existing error is kept as is.
    pub fn to_error(self, error: E) -> Self {
        Outcome(self.0.filter_left(false, error))
    }

    /// Turn a failed outcome into okay with `data`. Existing data is kept as is.
    pub fn to_okay(self, data: T) -> Self {
        Outcome(self.0.filter_right(false, data))
    }

    /// Keep okay data that `predicate` accepts; rejected data becomes `error`.
    /// Same rule as [`Either::filter_left_if`].
    pub fn to_error_if<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Outcome(self.0.filter_left_if(predicate, error))
    }

    /// Keep an error that `predicate` accepts; a rejected error becomes okay with `data`.
    /// Same rule as [`Either::filter_right_if`].
    pub fn to_okay_if<P>(self, predicate: P, data: T) -> Self
    where
        P: FnOnce(&E) -> bool,
    {
        Outcome(self.0.filter_right_if(predicate, data))
    }

    /// Fail with `error` when the data is null.
    pub fn not_null(self, error: E) -> Self
    where
        T: Nullable,
    {
        Outcome(self.0.left_not_null(error))
    }

    /// Fail with `error` when the data is falsy; see [`crate::truthiness`].
    pub fn not_falsy(self, error: E) -> Self
    where
        T: Falsy,
    {
        Outcome(self.0.left_not_falsy(error))
    }

    /// True when okay with data equal to `data`.
    pub fn contains(&self, data: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.left_contains(data)
    }

    /// True when failed with an error equal to `error`.
    pub fn error_contains(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        self.0.right_contains(error)
    }

    /// True when okay and `predicate` accepts the data.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.0.exists_left(predicate)
    }

    /// Keep the data as an [`Optional`], dropping any error.
    pub fn to_option(self) -> Optional<T> {
        self.0.to_option_from_left()
    }

    /// Convert into a std `Result`.
    pub fn into_result(self) -> Result<T, E> {
        self.0.into_result()
    }
}

impl<T, E> From<Either<T, E>> for Outcome<T, E> {
    fn from(either: Either<T, E>) -> Self {
        Outcome(either)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome(Either::from(result))
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: Repr, E: Repr> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Either::Left(data) => write!(f, "Okay({})", Rendered(data)),
            Either::Right(error) => write!(f, "Error({})", Rendered(error)),
        }
    }
}

impl<T: Repr, E: Repr> Repr for Outcome<T, E> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
