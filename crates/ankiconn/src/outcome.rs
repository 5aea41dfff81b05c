//! The uniform result of an AnkiConnect action.

use serde_json::Value;

/// Result of a single AnkiConnect action, unwrapped from the `{result,
/// error}` response envelope.
///
/// Exactly one variant applies per call: a non-null `error` slot becomes
/// [`Outcome::Failure`], anything else becomes [`Outcome::Success`] with the
/// `result` slot (which is `null` for void actions). The failure reason is
/// kept as a raw [`Value`] rather than a `String`: AnkiConnect reports
/// errors as strings today, but the envelope does not guarantee it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action succeeded; `Value::Null` for void actions.
    Success(Value),
    /// The action failed; carries the envelope's error slot verbatim.
    Failure(Value),
}

impl Outcome {
    /// Unwrap a response envelope into an outcome.
    pub(crate) fn from_envelope(result: Option<Value>, error: Option<Value>) -> Self {
        match error {
            Some(reason) if !reason.is_null() => Outcome::Failure(reason),
            _ => Outcome::Success(result.unwrap_or(Value::Null)),
        }
    }

    /// True if this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_slot_wins() {
        let outcome = Outcome::from_envelope(Some(json!(1)), Some(json!("deck was not found")));
        assert_eq!(outcome, Outcome::Failure(json!("deck was not found")));
    }

    #[test]
    fn null_error_is_success() {
        let outcome = Outcome::from_envelope(Some(json!([1, 2])), None);
        assert_eq!(outcome, Outcome::Success(json!([1, 2])));
    }

    #[test]
    fn void_result_is_null_success() {
        let outcome = Outcome::from_envelope(None, None);
        assert_eq!(outcome, Outcome::Success(Value::Null));
        assert!(outcome.is_success());
    }

    #[test]
    fn failure_reason_may_be_structured() {
        let reason = json!({ "code": 404, "message": "missing" });
        let outcome = Outcome::from_envelope(None, Some(reason.clone()));
        assert_eq!(outcome, Outcome::Failure(reason));
    }
}
