// Copyright 2025 Cowboy AI, LLC.

//! Strict outcomes: the error side is always a [`Fault`].
//!
//! Descriptive strings handed to [`StrictOutcome::failure`] are wrapped into
//! a fault, and [`StrictOutcome::data_or_throw`] hands the stored fault back
//! as an `Err` so callers can leave the box with `?`.

use tracing::debug;

use crate::errors::ErrorValue;
use crate::fault::{Fault, FaultKind};
use crate::outcome::Outcome;

/// An [`Outcome`] whose error side is always a [`Fault`].
pub type StrictOutcome<T> = Outcome<T, Fault>;

impl<T> Outcome<T, Fault> {
    /// Failed outcome from anything that converts into a fault.
    ///
    /// ```rust
    /// use cim_fp::{FaultKind, StrictOutcome};
    ///
    /// let failed: StrictOutcome<i32> = StrictOutcome::failure("quota exceeded");
    /// let fault = failed.data_or_throw().unwrap_err();
    /// assert_eq!(fault.kind(), FaultKind::Message);
    /// ```
    pub fn failure(error: impl Into<Fault>) -> Self {
        let fault = error.into();
        if fault.kind() == FaultKind::Message {
            debug!(message = %fault.message(), "wrapped descriptive error into a fault");
        }
        Outcome::error(fault)
    }

    /// The data, or the stored fault as `Err`.
    pub fn data_or_throw(self) -> Result<T, Fault> {
        self.into_result().map_err(|fault| {
            debug!(kind = ?fault.kind(), message = %fault.message(), "re-raising stored fault");
            fault
        })
    }
}

impl<T> Outcome<T, ErrorValue> {
    /// Tighten a lenient outcome, wrapping a message error into a fault.
    pub fn into_strict(self) -> StrictOutcome<T> {
        self.map_error(ErrorValue::into_fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load(raw: &str) -> Result<i32, Fault> {
        let parsed: StrictOutcome<i32> = StrictOutcome::okay(raw)
            .map_safely(|raw| raw.parse::<i32>().map_err(|e| Fault::from_error(&e)));
        let value = parsed.data_or_throw()?;
        Ok(value * 2)
    }

    #[test]
    fn test_failure_wraps_strings() {
        let failed: StrictOutcome<i32> = StrictOutcome::failure("oh no");
        let fault = failed.error_or(Fault::new("unused"));
        assert_eq!(fault.kind(), FaultKind::Message);
        assert_eq!(fault.message(), "oh no");

        let failed: StrictOutcome<i32> = StrictOutcome::failure(anyhow::anyhow!("boom"));
        assert_eq!(failed.error_or(Fault::new("unused")).kind(), FaultKind::Raised);
    }

    #[test]
    fn test_data_or_throw() {
        assert_eq!(StrictOutcome::okay(3).data_or_throw(), Ok(3));

        let failed: StrictOutcome<i32> = StrictOutcome::error(Fault::new("Error!"));
        assert_eq!(failed.data_or_throw(), Err(Fault::new("Error!")));
    }

    #[test]
    fn test_data_or_throw_with_question_mark() {
        assert_eq!(load("21"), Ok(42));
        let fault = load("nope").unwrap_err();
        assert_eq!(fault.kind(), FaultKind::Raised);
    }

    #[test]
    fn test_into_strict() {
        let lenient: Outcome<i32> = Outcome::error(ErrorValue::message("plain"));
        let strict = lenient.into_strict();
        assert_eq!(strict.data_or_throw(), Err(Fault::from_message("plain")));

        let lenient: Outcome<i32> = Outcome::okay(1);
        assert_eq!(lenient.into_strict().data_or_throw(), Ok(1));
    }

    #[test]
    fn test_missing_key_generates_fault() {
        let source = json!({"name": "value"});
        let found: StrictOutcome<serde_json::Value> = StrictOutcome::from_mapping_or_fault(&source, "name");
        assert_eq!(found.data_or_throw(), Ok(json!("value")));

        let missing: StrictOutcome<serde_json::Value> = StrictOutcome::from_mapping_or_fault(&source, "missing");
        let fault = missing.data_or_throw().unwrap_err();
        assert!(fault.is_missing_key());
    }

    #[test]
    fn test_constructors_accept_plain_messages() {
        let source = json!({"name": "value"});
        let found: StrictOutcome<serde_json::Value> = StrictOutcome::from_mapping(&source, "name", "oh no");
        assert_eq!(found.data_or_throw(), Ok(json!("value")));

        let missing: StrictOutcome<serde_json::Value> = StrictOutcome::from_mapping(&source, "missing", "oh no");
        assert_eq!(missing.to_string(), "Error(oh no)");
        let fault = missing.data_or_throw().unwrap_err();
        assert_eq!(fault.kind(), FaultKind::Message);

        let o: StrictOutcome<i32> = StrictOutcome::okay_when(-1, "not positive", |d| *d > 0);
        assert_eq!(o.data_or_throw(), Err(Fault::from_message("not positive")));
        let o: StrictOutcome<Option<i32>> = StrictOutcome::okay_not_null(None, "null".to_string());
        assert_eq!(o.to_string(), "Error(null)");
        let o: StrictOutcome<i32> = StrictOutcome::error("Error!");
        assert_eq!(o.error_or(Fault::new("unused")).kind(), FaultKind::Message);
    }

    #[test]
    fn test_display() {
        let failed: StrictOutcome<i32> = StrictOutcome::failure("Error!");
        assert_eq!(failed.to_string(), "Error(Error!)");
    }
}
