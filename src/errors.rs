// Copyright 2025 Cowboy AI, LLC.

//! Error payloads for [`Outcome`](crate::Outcome)

#[cfg(feature = "json-schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fault::Fault;

/// The error side of a lenient outcome: a descriptive string or a captured fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(JsonSchema))]
#[serde(tag = "kind", content = "value")]
pub enum ErrorValue {
    /// Descriptive message
    #[error("{0}")]
    Message(String),

    /// Captured fault
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl ErrorValue {
    /// Create a message error
    pub fn message(msg: impl Into<String>) -> Self {
        ErrorValue::Message(msg.into())
    }

    /// Check if this error carries a captured fault
    pub fn is_fault(&self) -> bool {
        matches!(self, ErrorValue::Fault(_))
    }

    /// Borrow the fault, if this error carries one
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            ErrorValue::Fault(fault) => Some(fault),
            ErrorValue::Message(_) => None,
        }
    }

    /// Convert into a fault, wrapping a bare message into one.
    pub fn into_fault(self) -> Fault {
        match self {
            ErrorValue::Message(msg) => Fault::from_message(msg),
            ErrorValue::Fault(fault) => fault,
        }
    }
}

impl From<String> for ErrorValue {
    fn from(msg: String) -> Self {
        ErrorValue::Message(msg)
    }
}

impl From<&str> for ErrorValue {
    fn from(msg: &str) -> Self {
        ErrorValue::Message(msg.to_string())
    }
}

impl From<anyhow::Error> for ErrorValue {
    fn from(err: anyhow::Error) -> Self {
        ErrorValue::Fault(Fault::from(err))
    }
}

impl From<ErrorValue> for Fault {
    fn from(err: ErrorValue) -> Self {
        err.into_fault()
    }
}
