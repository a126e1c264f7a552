// Copyright 2025 Cowboy AI, LLC.

//! Faults: failures captured as data.
//!
//! A [`Fault`] is what the "safely" combinators store when a callback fails,
//! and what a [`StrictOutcome`](crate::StrictOutcome) always carries on its
//! error side. Its `Display` is the bare message, so a fault built from
//! `"Error!"` renders as `Error!` inside `Error(..)`.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "json-schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Where a fault came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(JsonSchema))]
pub enum FaultKind {
    /// Raised by user code, usually a callback returning `Err`
    Raised,
    /// A descriptive string promoted to a fault
    Message,
    /// A keyed lookup found nothing under the requested key
    MissingKey,
    /// A closure panicked inside [`catch`]
    Panic,
}

/// A captured failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(JsonSchema))]
#[error("{message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    /// Create a fault raised by user code.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(FaultKind::Raised, message)
    }

    /// Create a fault of an explicit kind.
    pub fn with_kind(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Promote a descriptive string to a fault.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::with_kind(FaultKind::Message, message)
    }

    /// Fault generated when a keyed source has no entry for `key`.
    pub fn missing_key(key: impl fmt::Display) -> Self {
        Self::with_kind(FaultKind::MissingKey, format!("Key '{}' not found", key))
    }

    /// Capture any error, flattening its source chain into the message.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::new(message)
    }

    /// Capture a panic payload as returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        Self::with_kind(FaultKind::Panic, message)
    }

    /// Where this fault came from.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The fault message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this fault was generated by a failed keyed lookup
    pub fn is_missing_key(&self) -> bool {
        self.kind == FaultKind::MissingKey
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Fault::from_message(message)
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Fault::from_message(message)
    }
}

impl From<anyhow::Error> for Fault {
    fn from(err: anyhow::Error) -> Self {
        Fault::new(format!("{:#}", err))
    }
}

impl From<serde_json::Error> for Fault {
    fn from(err: serde_json::Error) -> Self {
        Fault::from_error(&err)
    }
}

/// Run `f`, turning a panic into a [`Fault`] of kind [`FaultKind::Panic`].
///
/// This is the bridge between panicking code and the "safely" combinators:
///
/// ```rust
/// use cim_fp::{fault, Either, Fault};
///
/// let parsed: Either<i32, Fault> = Either::left("12")
///     .map_left_safely(|s: &str| fault::catch(|| s.parse::<i32>().expect("digits")));
/// assert!(parsed.left_contains(&12));
/// ```
pub fn catch<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let fault = Fault::from_panic(payload);
        debug!(message = %fault.message(), "captured panic as fault");
        fault
    })
}
