//! Per-call outcomes and the reply sentinel.

use std::sync::{PoisonError, RwLock};

use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Status line of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcome {
    /// HTTP status code.
    pub status_code: u16,
    /// Reason phrase for the status code.
    pub reason_phrase: String,
}

impl CallOutcome {
    /// Create a new outcome.
    pub fn new(status_code: u16, reason_phrase: impl Into<String>) -> Self {
        Self {
            status_code,
            reason_phrase: reason_phrase.into(),
        }
    }

    pub(crate) fn from_status(status: StatusCode) -> Self {
        Self::new(status.as_u16(), status.canonical_reason().unwrap_or_default())
    }

    /// Take the reason phrase from the status line the server sent, falling
    /// back to the canonical phrase when the server sent the standard one.
    pub(crate) fn from_response(response: &reqwest::Response) -> Self {
        let status = response.status();
        match response
            .extensions()
            .get::<ReasonPhrase>()
            .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        {
            Some(reason) => Self::new(status.as_u16(), reason),
            None => Self::from_status(status),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Whether the remote API answered with an error status.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }
}

impl std::fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status_code, self.reason_phrase)
    }
}

/// Result of a dispatched API call.
///
/// `Failure` is returned, not raised, when the API answers with a 4xx/5xx
/// status. Callers check for it the same way they would check any fallible
/// result.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Decoded JSON body. Empty bodies decode to `Value::Null`.
    Success { outcome: CallOutcome, body: Value },
    /// The API answered with an error status.
    Failure(CallOutcome),
}

impl Reply {
    /// Check whether this is the failure sentinel.
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failure(_))
    }

    /// Check whether the call succeeded.
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// Status line this reply was produced from.
    pub fn outcome(&self) -> &CallOutcome {
        match self {
            Reply::Success { outcome, .. } | Reply::Failure(outcome) => outcome,
        }
    }

    /// Borrow the decoded body, if the call succeeded.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Reply::Success { body, .. } => Some(body),
            Reply::Failure(_) => None,
        }
    }

    /// Take the decoded body, if the call succeeded.
    pub fn into_body(self) -> Option<Value> {
        match self {
            Reply::Success { body, .. } => Some(body),
            Reply::Failure(_) => None,
        }
    }

    /// Deserialize the body into a typed model.
    ///
    /// Returns `Ok(None)` for the failure sentinel.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self.body() {
            Some(body) => Ok(Some(T::deserialize(body)?)),
            None => Ok(None),
        }
    }
}

/// Last outcome observed by a client instance.
#[derive(Debug, Default)]
pub(crate) struct LastOutcome(RwLock<Option<CallOutcome>>);

impl LastOutcome {
    pub fn get(&self) -> Option<CallOutcome> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, outcome: CallOutcome) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(outcome);
    }

    pub fn clear(&self) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_outcome_from_status() {
        let outcome = CallOutcome::from_status(StatusCode::NOT_FOUND);
        assert_eq!(outcome, CallOutcome::new(404, "Not Found"));
        assert!(outcome.is_error());
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "404 Not Found");
    }

    #[test]
    fn test_reply_accessors() {
        let ok = Reply::Success {
            outcome: CallOutcome::new(201, "Created"),
            body: json!({ "webinarKey": "123" }),
        };
        assert!(ok.is_success());
        assert_eq!(ok.body().and_then(|b| b["webinarKey"].as_str()), Some("123"));

        let failed = Reply::Failure(CallOutcome::new(500, "Internal Server Error"));
        assert!(failed.is_failure());
        assert_eq!(failed.outcome().status_code, 500);
        assert!(failed.body().is_none());
        assert_eq!(failed.decode::<Value>().unwrap(), None);
    }

    #[test]
    fn test_last_outcome_overwrites() {
        let last = LastOutcome::default();
        assert!(last.get().is_none());

        last.set(CallOutcome::new(200, "OK"));
        last.set(CallOutcome::new(404, "Not Found"));
        assert_eq!(last.get(), Some(CallOutcome::new(404, "Not Found")));

        last.clear();
        assert!(last.get().is_none());
    }
}
