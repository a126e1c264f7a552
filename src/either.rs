// Copyright 2025 Cowboy AI, LLC.

//! The disjoint union `Either<L, R>` and its combinators.
//!
//! Exactly one side holds a value. By convention `Left` is the primary
//! (success) side and `Right` the secondary (error) side; [`Optional`] and
//! [`Outcome`](crate::Outcome) are both specializations of this vocabulary.
//!
//! Combinators consume the union and return a new one or a plain value.
//! Callbacks run inline, at most once, and only for the side they are
//! documented for. A callback that fails propagates to the caller, except
//! through [`Either::map_left_safely`], which turns the failure into a
//! right-sided union.

use std::fmt;

#[cfg(feature = "json-schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fault::Fault;
use crate::lookup::Lookup;
use crate::optional::Optional;
use crate::repr::{Rendered, Repr};
use crate::truthiness::{Falsy, Nullable};

/// A standard Either ADT: Left(L) or Right(R).
///
/// Null payloads are ordinary payloads: `Either::<Option<i32>, ()>::left(None)`
/// is left-sided. Which side is occupied is tracked by the variant alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(JsonSchema))]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Left branch
    Left(L),
    /// Right branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Build a left-sided union.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Build a right-sided union.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Build a union from `candidate`, left-sided when `predicate` accepts it.
    ///
    /// The predicate runs immediately.
    pub fn left_when<P>(candidate: L, right: R, predicate: P) -> Self
    where
        P: FnOnce(&L) -> bool,
    {
        Either::Left(candidate).filter_left_if(predicate, right)
    }

    /// Build a union from `candidate`, right-sided when `predicate` accepts it.
    pub fn right_when<P>(candidate: R, left: L, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        Either::Right(candidate).filter_right_if(predicate, left)
    }

    /// Left-sided with a clone of `source[key]`, or right-sided with `right`.
    pub fn from_mapping<S, K>(source: &S, key: &K, right: R) -> Self
    where
        S: Lookup<K, Value = L> + ?Sized,
        K: fmt::Display + ?Sized,
        L: Clone,
    {
        Self::from_mapping_or_create(source, key, || right)
    }

    /// Like [`Either::from_mapping`], generating a missing-key [`Fault`].
    pub fn from_mapping_or_fault<S, K>(source: &S, key: &K) -> Self
    where
        S: Lookup<K, Value = L> + ?Sized,
        K: fmt::Display + ?Sized,
        L: Clone,
        R: From<Fault>,
    {
        Self::from_mapping_or_create(source, key, || Fault::missing_key(key).into())
    }

    fn from_mapping_or_create<S, K, F>(source: &S, key: &K, missing: F) -> Self
    where
        S: Lookup<K, Value = L> + ?Sized,
        K: fmt::Display + ?Sized,
        L: Clone,
        F: FnOnce() -> R,
    {
        match source.lookup(key) {
            Some(value) => Either::Left(value.clone()),
            None => {
                debug!(key = %key, "key not present in keyed source");
                Either::Right(missing())
            }
        }
    }

    /// Check if this is the left side
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Check if this is the right side
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Get a reference to the Left value if present.
    pub fn as_left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to the Right value if present.
    pub fn as_right(&self) -> Option<&R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Swap the sides.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// The left value, or `alt`.
    pub fn left_or(self, alt: L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => alt,
        }
    }

    /// The right value, or `alt`.
    pub fn right_or(self, alt: R) -> R {
        match self {
            Either::Left(_) => alt,
            Either::Right(r) => r,
        }
    }

    /// The left value, or one computed from the right value.
    pub fn left_or_create<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Left(l) => l,
            Either::Right(r) => f(r),
        }
    }

    /// The right value, or one computed from the left value.
    pub fn right_or_create<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    /// `self` if left-sided, otherwise a new left holding `alt`.
    pub fn or_left(self, alt: L) -> Self {
        match self {
            Either::Left(_) => self,
            Either::Right(_) => Either::Left(alt),
        }
    }

    /// `self` if right-sided, otherwise a new right holding `alt`.
    pub fn or_right(self, alt: R) -> Self {
        match self {
            Either::Left(_) => Either::Right(alt),
            Either::Right(_) => self,
        }
    }

    /// `self` if left-sided, otherwise a left computed from the right value.
    pub fn or_create_left<F>(self, f: F) -> Self
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Left(f(r)),
        }
    }

    /// `self` if right-sided, otherwise a right computed from the left value.
    pub fn or_create_right<F>(self, f: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => Either::Right(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// `self` if left-sided, otherwise `alt` as a whole (whichever side it is).
    pub fn else_left(self, alt: Self) -> Self {
        match self {
            Either::Left(_) => self,
            Either::Right(_) => alt,
        }
    }

    /// `self` if right-sided, otherwise `alt` as a whole.
    pub fn else_right(self, alt: Self) -> Self {
        match self {
            Either::Left(_) => alt,
            Either::Right(_) => self,
        }
    }

    /// `self` if left-sided, otherwise the union built from the right value.
    pub fn else_create_left<F>(self, f: F) -> Self
    where
        F: FnOnce(R) -> Self,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// `self` if right-sided, otherwise the union built from the left value.
    pub fn else_create_right<F>(self, f: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Fold both sides into one value; exactly one function runs.
    #[doc(alias = "match")]
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Run `f` on the left value, if any.
    pub fn match_left<F>(&self, f: F)
    where
        F: FnOnce(&L),
    {
        self.as_ref().fold(f, |_| ())
    }

    /// Run `f` on the right value, if any.
    pub fn match_right<F>(&self, f: F)
    where
        F: FnOnce(&R),
    {
        self.as_ref().fold(|_| (), f)
    }

    /// Map over the Left value.
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Map over the Right value.
    pub fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Map over the Left value with a fallible callback; an `Err` propagates.
    pub fn try_map_left<T, X, F>(self, f: F) -> Result<Either<T, R>, X>
    where
        F: FnOnce(L) -> Result<T, X>,
    {
        match self {
            Either::Left(l) => f(l).map(Either::Left),
            Either::Right(r) => Ok(Either::Right(r)),
        }
    }

    /// Map over the Left value, capturing a failed callback on the right side.
    ///
    /// ```rust
    /// use cim_fp::{Either, Fault};
    ///
    /// let parsed: Either<i32, Fault> = Either::left("x1")
    ///     .map_left_safely(|s: &str| s.parse::<i32>().map_err(|e| Fault::new(e.to_string())));
    /// assert!(parsed.is_right());
    /// ```
    pub fn map_left_safely<T, X, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Result<T, X>,
        X: Into<R>,
    {
        match self {
            Either::Left(l) => match f(l) {
                Ok(value) => Either::Left(value),
                Err(fault) => {
                    debug!("callback failed in map_left_safely; captured on the right side");
                    Either::Right(fault.into())
                }
            },
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a union-returning computation on the left value.
    pub fn flat_map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Alias of [`Either::flat_map_left`].
    pub fn and_then<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        self.flat_map_left(f)
    }

    /// Chain a union-returning computation on the right value.
    pub fn flat_map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Switch a left union to `right_if_false` when `condition` is false.
    pub fn filter_left(self, condition: bool, right_if_false: R) -> Self {
        match self {
            Either::Left(_) if !condition => Either::Right(right_if_false),
            other => other,
        }
    }

    /// Switch a left union to `right_if_false` when `predicate` rejects its value.
    pub fn filter_left_if<P>(self, predicate: P, right_if_false: R) -> Self
    where
        P: FnOnce(&L) -> bool,
    {
        match self {
            Either::Left(l) => {
                if predicate(&l) {
                    Either::Left(l)
                } else {
                    Either::Right(right_if_false)
                }
            }
            right => right,
        }
    }

    /// Switch a right union to `left_if_false` when `condition` is false.
    pub fn filter_right(self, condition: bool, left_if_false: L) -> Self {
        match self {
            Either::Right(_) if !condition => Either::Left(left_if_false),
            other => other,
        }
    }

    /// Switch a right union to `left_if_false` when `predicate` rejects its value.
    pub fn filter_right_if<P>(self, predicate: P, left_if_false: L) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Either::Right(r) => {
                if predicate(&r) {
                    Either::Right(r)
                } else {
                    Either::Left(left_if_false)
                }
            }
            left => left,
        }
    }

    /// Switch to the right side when the left payload is null.
    pub fn left_not_null(self, right: R) -> Self
    where
        L: Nullable,
    {
        self.filter_left_if(|l| !l.is_null(), right)
    }

    /// Switch to the left side when the right payload is null.
    pub fn right_not_null(self, left: L) -> Self
    where
        R: Nullable,
    {
        self.filter_right_if(|r| !r.is_null(), left)
    }

    /// Switch to the right side when the left payload is falsy.
    ///
    /// See [`crate::truthiness`] for the values that count as falsy.
    pub fn left_not_falsy(self, right: R) -> Self
    where
        L: Falsy,
    {
        self.filter_left_if(|l| !l.is_falsy(), right)
    }

    /// Switch to the left side when the right payload is falsy.
    pub fn right_not_falsy(self, left: L) -> Self
    where
        R: Falsy,
    {
        self.filter_right_if(|r| !r.is_falsy(), left)
    }

    /// True when left-sided with a value equal to `value`.
    pub fn left_contains(&self, value: &L) -> bool
    where
        L: PartialEq,
    {
        self.as_left().is_some_and(|l| l == value)
    }

    /// True when right-sided with a value equal to `value`.
    pub fn right_contains(&self, value: &R) -> bool
    where
        R: PartialEq,
    {
        self.as_right().is_some_and(|r| r == value)
    }

    /// True when left-sided and `predicate` accepts the value.
    pub fn exists_left<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        self.as_left().is_some_and(predicate)
    }

    /// True when right-sided and `predicate` accepts the value.
    pub fn exists_right<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.as_right().is_some_and(predicate)
    }

    /// Keep the left value as an [`Optional`], dropping any right payload.
    pub fn to_option_from_left(self) -> Optional<L> {
        self.fold(Optional::some, |_| Optional::none())
    }

    /// Keep the right value as an [`Optional`], dropping any left payload.
    pub fn to_option_from_right(self) -> Optional<R> {
        self.fold(|_| Optional::none(), Optional::some)
    }

    /// Convert into a `Result`, left as `Ok`.
    pub fn into_result(self) -> Result<L, R> {
        self.fold(Ok, Err)
    }
}

impl<L, R> From<Result<L, R>> for Either<L, R> {
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(l) => Either::Left(l),
            Err(r) => Either::Right(r),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<L, R> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: Repr, R: Repr> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", Rendered(l)),
            Either::Right(r) => write!(f, "Right({})", Rendered(r)),
        }
    }
}

impl<L: Repr, R: Repr> Repr for Either<L, R> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    type E = Either<i32, String>;

    fn left(v: i32) -> E {
        Either::left(v)
    }

    fn right(v: &str) -> E {
        Either::right(v.to_string())
    }

    #[test]
    fn test_sides() {
        assert!(left(1).is_left());
        assert!(!left(1).is_right());
        assert!(right("x").is_right());
        assert!(!right("x").is_left());
    }

    #[test]
    fn test_null_payload_is_still_a_side() {
        let e: Either<Option<i32>, ()> = Either::left(None);
        assert!(e.is_left());
        assert_eq!(e.left_or(Some(3)), None);
    }

    #[test]
    fn test_value_or() {
        assert_eq!(left(1).left_or(9), 1);
        assert_eq!(right("x").left_or(9), 9);
        assert_eq!(left(1).right_or("alt".into()), "alt");
        assert_eq!(right("x").right_or("alt".into()), "x");
    }

    #[test]
    fn test_or_create_is_lazy() {
        let calls = Cell::new(0);
        let value = left(4).left_or_create(|r| {
            calls.set(calls.get() + 1);
            r.len() as i32
        });
        assert_eq!(value, 4);
        assert_eq!(calls.get(), 0);

        assert_eq!(right("abc").left_or_create(|r| r.len() as i32), 3);
        assert_eq!(left(12).right_or_create(|l| l.to_string()), "12");
    }

    #[test]
    fn test_or_side() {
        assert_eq!(left(1).or_left(2), left(1));
        assert_eq!(right("x").or_left(2), left(2));
        assert_eq!(left(1).or_right("y".into()), right("y"));
        assert_eq!(right("x").or_right("y".into()), right("x"));

        assert_eq!(right("four").or_create_left(|r| r.len() as i32), left(4));
        assert_eq!(left(7).or_create_right(|l| format!("was {}", l)), right("was 7"));
        assert_eq!(left(7).or_create_left(|_| unreachable!()), left(7));
    }

    #[test]
    fn test_else_side_propagates_whole_union() {
        assert_eq!(left(1).else_left(right("alt")), left(1));
        assert_eq!(right("x").else_left(right("alt")), right("alt"));
        assert_eq!(right("x").else_left(left(5)), left(5));
        assert_eq!(left(1).else_right(left(2)), left(2));
        assert_eq!(right("x").else_right(left(2)), right("x"));

        assert_eq!(right("x").else_create_left(|r| right(&format!("{}!", r))), right("x!"));
        assert_eq!(left(3).else_create_right(|l| left(l * 2)), left(6));
    }

    #[test]
    fn test_fold_runs_exactly_one_branch() {
        let on_left = Cell::new(0);
        let on_right = Cell::new(0);
        let out = left(2).fold(
            |l| {
                on_left.set(on_left.get() + 1);
                l * 10
            },
            |_| {
                on_right.set(on_right.get() + 1);
                0
            },
        );
        assert_eq!(out, 20);
        assert_eq!((on_left.get(), on_right.get()), (1, 0));
    }

    #[test]
    fn test_match_side_effects() {
        let seen = Cell::new(0);
        left(5).match_left(|l| seen.set(*l));
        assert_eq!(seen.get(), 5);
        right("x").match_left(|_| seen.set(-1));
        assert_eq!(seen.get(), 5);

        let seen = Cell::new(0usize);
        right("abc").match_right(|r| seen.set(r.len()));
        assert_eq!(seen.get(), 3);
        left(1).match_right(|_| seen.set(99));
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_map_sides() {
        assert_eq!(left(2).map_left(|l| l + 1), left(3));
        assert_eq!(right("x").map_left(|l| l + 1), right("x"));
        assert_eq!(right("x").map_right(|r| r.to_uppercase()), right("X"));
        assert_eq!(left(2).map_right(|r| r.to_uppercase()), left(2));
    }

    #[test]
    fn test_map_left_safely_captures_fault() {
        let e: Either<i32, Fault> = Either::left(0);
        let mapped = e.map_left_safely(|l| {
            if l == 0 {
                Err(Fault::new("division by zero"))
            } else {
                Ok(100 / l)
            }
        });
        assert!(mapped.right_contains(&Fault::new("division by zero")));

        let e: Either<i32, Fault> = Either::left(4);
        assert_eq!(e.map_left_safely(|l| Ok::<_, Fault>(100 / l)), Either::left(25));
    }

    #[test]
    fn test_try_map_left_propagates() {
        let result = left(1).try_map_left(|_| Err::<i32, _>("raised"));
        assert_eq!(result, Err("raised"));

        let result = right("x").try_map_left(|_| Err::<i32, _>("raised"));
        assert_eq!(result, Ok(right("x")));
    }

    #[test]
    fn test_flat_map_left() {
        assert_eq!(left(3).flat_map_left(|l| left(l * 3)), left(9));
        assert_eq!(left(3).and_then(|_| right("no")), right("no"));
        assert_eq!(right("x").and_then(|l| left(l * 3)), right("x"));
        assert_eq!(right("x").flat_map_right(|r| Either::<i32, usize>::right(r.len())), Either::right(1));
    }

    #[test]
    fn test_filters() {
        assert_eq!(left(1).filter_left(false, "no".into()), right("no"));
        assert_eq!(left(1).filter_left(true, "no".into()), left(1));
        assert_eq!(right("x").filter_left(false, "no".into()), right("x"));

        assert_eq!(left(-1).filter_left_if(|l| *l > 0, "neg".into()), right("neg"));
        assert_eq!(left(1).filter_left_if(|l| *l > 0, "neg".into()), left(1));

        assert_eq!(right("x").filter_right(false, 0), left(0));
        assert_eq!(left(1).filter_right(false, 0), left(1));
        assert_eq!(right("").filter_right_if(|r| !r.is_empty(), 0), left(0));
    }

    #[test]
    fn test_not_null_and_not_falsy() {
        let e: Either<Option<i32>, &str> = Either::left(None);
        assert_eq!(e.left_not_null("null"), Either::right("null"));
        let e: Either<Option<i32>, &str> = Either::left(Some(0));
        assert_eq!(e.left_not_null("null"), Either::left(Some(0)));
        assert_eq!(e.left_not_falsy("falsy"), Either::right("falsy"));

        let e: Either<i32, Option<&str>> = Either::right(None);
        assert_eq!(e.right_not_null(1), Either::left(1));
        let e: Either<i32, String> = Either::right(String::new());
        assert_eq!(e.right_not_falsy(1), Either::left(1));
    }

    #[test]
    fn test_contains_and_exists() {
        assert!(left(1).left_contains(&1));
        assert!(!left(1).left_contains(&2));
        assert!(!right("1").left_contains(&1));
        assert!(right("x").right_contains(&"x".to_string()));

        assert!(left(5).exists_left(|l| *l > 0));
        assert!(!right("x").exists_left(|_| true));
        assert!(right("x").exists_right(|r| r == "x"));
        assert!(!left(5).exists_right(|_| true));
    }

    #[test]
    fn test_when_constructors_are_eager() {
        assert_eq!(E::left_when(5, "err".into(), |x| *x > 0).left_or(-1), 5);
        assert_eq!(E::left_when(-5, "err".into(), |x| *x > 0), right("err"));
        assert_eq!(E::right_when("bad".into(), 0, |r| r.starts_with('b')), right("bad"));
        assert_eq!(E::right_when("ok".into(), 0, |r| r.starts_with('b')), left(0));
    }

    #[test]
    fn test_from_mapping() {
        let mut source = HashMap::new();
        source.insert("name".to_string(), "value");

        let e = Either::from_mapping(&source, "name", "oh no");
        assert_eq!(e, Either::left("value"));
        let e = Either::from_mapping(&source, "missing", "oh no");
        assert_eq!(e, Either::right("oh no"));

        let e: Either<&str, Fault> = Either::from_mapping_or_fault(&source, "missing");
        assert!(e.exists_right(Fault::is_missing_key));
        assert_eq!(e.right_or(Fault::new("")).message(), "Key 'missing' not found");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(left(1).to_option_from_left(), Optional::some(1));
        assert_eq!(right("x").to_option_from_left(), Optional::none());
        assert_eq!(right("x").to_option_from_right(), Optional::some("x".to_string()));
    }

    #[test]
    fn test_result_conversion() {
        assert_eq!(left(1).into_result(), Ok(1));
        assert_eq!(E::from(Err::<i32, String>("e".into())), right("e"));
        let result: Result<i32, String> = left(2).into();
        assert_eq!(result, Ok(2));
        assert_eq!(left(1).flip(), Either::<String, i32>::right(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(left(10).to_string(), "Left(10)");
        assert_eq!(right("oops").to_string(), "Right(oops)");
        let e: Either<Option<i32>, ()> = Either::left(None);
        assert_eq!(e.to_string(), "Left(null)");
        let nested: Either<Either<i32, i32>, ()> = Either::left(Either::right(2));
        assert_eq!(nested.to_string(), "Left(Right(2))");
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_value(left(3)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "Left", "value": 3}));
        let back: E = serde_json::from_value(json).unwrap();
        assert_eq!(back, left(3));
    }

    #[cfg(feature = "json-schema")]
    #[test]
    fn test_json_schema_describes_both_sides() {
        let schema = schemars::schema_for!(Either<i32, String>);
        let json = serde_json::to_string(&schema).unwrap();
        for name in ["\"kind\"", "\"value\"", "\"Left\"", "\"Right\""] {
            assert!(json.contains(name), "{name} missing from {json}");
        }
    }
}
