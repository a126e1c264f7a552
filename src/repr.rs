// Copyright 2025 Cowboy AI, LLC.

//! Payload rendering for the `Display` impls of the boxes.
//!
//! `Left(<repr>)`, `Some(<repr>)` and `Okay(<repr>)` need a rendering for
//! every payload, including the null ones, which render as `null`.
//!
//! Sequences render as `[a, b]` with each item rendered in turn, whether they
//! are a `Vec`, a slice or a JSON array, so `vec!["a", "b"]` and
//! `json!(["a", "b"])` both render as `[a, b]`. JSON objects have no typed
//! counterpart and keep serde_json's compact form, `{"a":1}`.

use std::fmt;

use serde_json::Value;

use crate::errors::ErrorValue;
use crate::fault::Fault;

/// Renders a payload inside a box's string form.
pub trait Repr {
    /// Write the payload representation.
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter so a [`Repr`] can be used with `write!` and `format!`.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Repr + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_repr(f)
    }
}

macro_rules! repr_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

repr_via_display!(
    bool, char, str, String,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    Fault, ErrorValue,
);

impl Repr for () {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

impl<T: Repr> Repr for Option<T> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_repr(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: Repr> Repr for [T] {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_repr(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Repr> Repr for Vec<T> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt_repr(f)
    }
}

impl Repr for Value {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Strings render unquoted, like every other string payload.
            Value::String(s) => f.write_str(s),
            Value::Array(items) => items.as_slice().fmt_repr(f),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl<T: Repr + ?Sized> Repr for &T {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_repr(f)
    }
}

impl<T: Repr + ?Sized> Repr for Box<T> {
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_repr(f)
    }
}
