//! Validation rules for session construction and transitions.
//!
//! Every rule maps to exactly one stable code so callers can branch on
//! cause. Violations are expected, recoverable failures; they surface
//! as `Failure(Validation, ..)` outcomes, never as panics.

use crate::outcome::{ErrorCategory, ErrorDetail, Outcome};
use thiserror::Error;

/// How far in the past a check-in may lie and still count as fresh, in
/// seconds. Tolerates clock skew and processing latency while rejecting
/// stale entries.
pub const FRESHNESS_WINDOW_SECONDS: i64 = 5;

/// How far ahead of the current time a check-in may be scheduled, in
/// days.
pub const MAX_FUTURE_CHECK_IN_DAYS: i64 = 365;

/// A violated business rule.
///
/// The variant name doubles as the stable error code reported on the
/// failure outcome.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum RuleViolation {
    /// A timestamp arrived without UTC provenance (non-zero offset).
    #[error("check-in and check-out times must be UTC")]
    NonUtcDateTime,

    /// Check-in scheduled more than the allowed bound into the future.
    #[error("check-in time cannot be more than 365 days in the future")]
    FutureCheckInTooFar,

    /// Fresh check-in older than the freshness window.
    #[error("check-in time cannot be more than 5 seconds in the past")]
    PastCheckInNotAllowed,

    /// Check-out attempted without a preceding check-in.
    #[error("a session must be checked in before it can be checked out")]
    CheckInRequiredBeforeCheckOut,

    /// Check-out at or before the check-in.
    #[error("check-out time must be after check-in time")]
    InvalidDateRange,

    /// The requested `(current, new)` status pair is not a legal move.
    #[error("the requested status transition is not allowed")]
    InvalidStatusTransition,

    /// Check-out attempted after the check-in stopped being fresh.
    #[error("check-out must follow check-in within 5 seconds")]
    StaleCheckIn,

    /// A `None` session carrying non-sentinel timestamps.
    #[error("a session without a status must carry sentinel timestamps")]
    InvalidNoneState,

    /// Reserved. Statuses are a closed enum in this crate, so `create`
    /// never produces this code; it stays in the set so consumers that
    /// branch on codes see a stable vocabulary.
    #[error("unrecognized session status")]
    InvalidStatus,
}

impl RuleViolation {
    /// The stable machine-readable code for this rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonUtcDateTime => "NonUtcDateTime",
            Self::FutureCheckInTooFar => "FutureCheckInTooFar",
            Self::PastCheckInNotAllowed => "PastCheckInNotAllowed",
            Self::CheckInRequiredBeforeCheckOut => "CheckInRequiredBeforeCheckOut",
            Self::InvalidDateRange => "InvalidDateRange",
            Self::InvalidStatusTransition => "InvalidStatusTransition",
            Self::StaleCheckIn => "StaleCheckIn",
            Self::InvalidNoneState => "InvalidNoneState",
            Self::InvalidStatus => "InvalidStatus",
        }
    }

    /// Render the violation as a structured error detail.
    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail::new(self.code(), self.to_string())
    }

    /// Shorthand for the failure outcome every violated rule produces.
    pub fn reject<T>(&self) -> Outcome<T> {
        Outcome::failure(ErrorCategory::Validation, self.detail())
    }
}

impl From<RuleViolation> for ErrorDetail {
    fn from(violation: RuleViolation) -> Self {
        violation.detail()
    }
}
