//! Error vocabulary shared by every failure outcome.
//!
//! An [`ErrorDetail`] pairs a stable machine-readable code with a
//! human-readable message; an [`ErrorCategory`] classifies the failure
//! as a whole.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a failure outcome.
///
/// `None` is reserved for success and must never appear on a failure;
/// the [`Failure`](crate::outcome::Failure) constructor enforces this.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Success marker. Never valid on a failure.
    None,
    /// A business rule rejected the input.
    Validation,
    /// The requested entity does not exist.
    NotFound,
    /// The caller is not allowed to perform the operation.
    Unauthorized,
    /// The operation conflicts with current state.
    Conflict,
    /// An unexpected internal condition.
    Internal,
    /// Several failures combined by [`Outcome::combine`](crate::outcome::Outcome::combine).
    Aggregate,
    /// The request itself was malformed.
    Invalid,
}

impl ErrorCategory {
    /// Get the category's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Validation => "Validation",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Conflict => "Conflict",
            Self::Internal => "Internal",
            Self::Aggregate => "Aggregate",
            Self::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One structured error: a stable code plus a human-readable message.
///
/// Codes identify the violated rule (one code per rule) so callers and
/// test harnesses can branch on cause without parsing message text.
///
/// # Panics
///
/// Constructing a detail with an empty code or message is a programming
/// error and panics; it is never surfaced as a recoverable failure.
///
/// # Example
///
/// ```rust
/// use turnstile::outcome::ErrorDetail;
///
/// let detail = ErrorDetail::new("InvalidDateRange", "check-out must be after check-in");
/// assert_eq!(detail.code(), "InvalidDateRange");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    code: String,
    message: String,
}

impl ErrorDetail {
    /// Create a detail from a non-empty code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let message = message.into();
        assert!(!code.is_empty(), "error detail requires a non-empty code");
        assert!(
            !message.is_empty(),
            "error detail requires a non-empty message"
        );
        Self { code, message }
    }

    /// The stable machine-readable identifier of the violated rule.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_returns_correct_value() {
        assert_eq!(ErrorCategory::None.name(), "None");
        assert_eq!(ErrorCategory::Validation.name(), "Validation");
        assert_eq!(ErrorCategory::Aggregate.name(), "Aggregate");
    }

    #[test]
    fn category_display_matches_name() {
        assert_eq!(ErrorCategory::Conflict.to_string(), "Conflict");
    }

    #[test]
    fn detail_exposes_code_and_message() {
        let detail = ErrorDetail::new("StaleCheckIn", "check-in is stale");
        assert_eq!(detail.code(), "StaleCheckIn");
        assert_eq!(detail.message(), "check-in is stale");
    }

    #[test]
    fn detail_display_joins_code_and_message() {
        let detail = ErrorDetail::new("InvalidStatus", "unrecognized status");
        assert_eq!(detail.to_string(), "InvalidStatus: unrecognized status");
    }

    #[test]
    #[should_panic(expected = "non-empty code")]
    fn empty_code_panics() {
        let _ = ErrorDetail::new("", "message");
    }

    #[test]
    #[should_panic(expected = "non-empty message")]
    fn empty_message_panics() {
        let _ = ErrorDetail::new("Code", "");
    }

    #[test]
    fn detail_serializes_correctly() {
        let detail = ErrorDetail::new("NonUtcDateTime", "timestamps must be UTC");
        let json = serde_json::to_string(&detail).unwrap();
        let deserialized: ErrorDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(detail, deserialized);
    }

    #[test]
    fn detail_is_comparable_by_value() {
        let a = ErrorDetail::new("X", "y");
        let b = ErrorDetail::new("X", "y");
        let c = ErrorDetail::new("X", "z");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
