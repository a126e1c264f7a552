//! # CIM FP
//!
//! Functional boxes for the Composable Information Machine.
//!
//! This crate provides three immutable two-state boxes and the combinators
//! to work with them without null checks or panic-driven control flow:
//! - **Either**: exactly one of two typed values, `Left` or `Right`
//! - **Optional**: a present (`Some`) or absent (`None`) value
//! - **Outcome**: success (`Okay`) or failure (`Error`) over an [`Either`]
//! - **StrictOutcome**: an outcome whose error side is always a [`Fault`]
//!
//! ## Design Principles
//!
//! 1. **Immutability**: every combinator returns a new box or a plain value
//! 2. **Explicit failure**: callbacks fail by returning `Err`; only the
//!    `*_safely` combinators capture that failure into the box
//! 3. **Typed truthiness**: null and falsy are traits, not coercions
//!
//! ```rust
//! use cim_fp::{Either, Optional, Outcome};
//!
//! let age = Either::<i32, &str>::left_when(42, "negative", |a| *a >= 0);
//! assert_eq!(age.to_string(), "Left(42)");
//!
//! let name = Optional::some("  ada ").map(str::trim).filter_if(|n| !n.is_empty());
//! assert_eq!(name.value_or("anonymous"), "ada");
//!
//! let total: Outcome<i32, String> = Outcome::okay(2).map(|n| n * 21);
//! assert_eq!(total.to_string(), "Okay(42)");
//! ```

#![warn(missing_docs)]

mod either;
mod errors;
mod optional;
mod outcome;
mod strict;
pub mod fault;
pub mod lookup;
pub mod repr;
pub mod truthiness;

// Re-export core types
pub use either::Either;
pub use errors::ErrorValue;
pub use fault::{Fault, FaultKind};
pub use lookup::Lookup;
pub use optional::Optional;
pub use outcome::Outcome;
pub use repr::Repr;
pub use strict::StrictOutcome;
pub use truthiness::{Falsy, Nullable};
