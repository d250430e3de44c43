//! Immutable session record and its lifecycle operations.

use super::rules::{RuleViolation, FRESHNESS_WINDOW_SECONDS, MAX_FUTURE_CHECK_IN_DAYS};
use super::status::SessionStatus;
use crate::outcome::Outcome;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// The sentinel timestamp carried by slots that hold no real time yet.
pub fn epoch_min() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

static EMPTY: OnceLock<SessionRecord> = OnceLock::new();

/// Immutable session value object.
///
/// A record can only be obtained through [`SessionRecord::create`] (or
/// the operations that delegate to it), so every instance satisfies the
/// business rules for its status. Records compare by value: two records
/// with the same timestamps and status are equal regardless of how they
/// were constructed.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use mockable::DefaultClock;
/// use turnstile::session::{epoch_min, SessionRecord, SessionStatus};
///
/// let clock = DefaultClock;
/// let record = SessionRecord::create(
///     (Utc::now() - Duration::seconds(1)).fixed_offset(),
///     epoch_min().fixed_offset(),
///     SessionStatus::CheckedIn,
///     None,
///     &clock,
/// )
/// .ensure_success();
///
/// assert_eq!(record.status(), SessionStatus::CheckedIn);
/// assert!(record.is_active(&clock));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    status: SessionStatus,
}

impl SessionRecord {
    /// The process-wide empty session: status `None`, both timestamps
    /// at the sentinel. Initialized once, then read-only.
    pub fn empty() -> &'static SessionRecord {
        EMPTY.get_or_init(|| SessionRecord {
            check_in: epoch_min(),
            check_out: epoch_min(),
            status: SessionStatus::None,
        })
    }

    /// Validate inputs and construct a record.
    ///
    /// This is the sole constructor; every business rule lives here.
    /// Inputs carry an explicit offset so UTC provenance is a checkable
    /// rule rather than an assumption: any non-zero offset is rejected
    /// with `NonUtcDateTime` before the status rules run.
    ///
    /// `previous` distinguishes a fresh entry (`None`) from a
    /// transition; a fresh check-in must fall inside the freshness
    /// window, while a transition re-validates an already accepted
    /// check-in. Checks are fail-fast: the first violated rule is
    /// returned and later rules are not evaluated.
    ///
    /// The current time is read from `clock` exactly once per call.
    pub fn create<C: Clock>(
        check_in: DateTime<FixedOffset>,
        check_out: DateTime<FixedOffset>,
        status: SessionStatus,
        previous: Option<SessionStatus>,
        clock: &C,
    ) -> Outcome<SessionRecord> {
        if check_in.offset().local_minus_utc() != 0 || check_out.offset().local_minus_utc() != 0 {
            return RuleViolation::NonUtcDateTime.reject();
        }

        let check_in = check_in.with_timezone(&Utc);
        let check_out = check_out.with_timezone(&Utc);
        let now = clock.utc();

        match status {
            SessionStatus::CheckedIn => {
                if check_in > now + Duration::days(MAX_FUTURE_CHECK_IN_DAYS) {
                    return RuleViolation::FutureCheckInTooFar.reject();
                }
                if previous.is_none()
                    && check_in < now - Duration::seconds(FRESHNESS_WINDOW_SECONDS)
                {
                    return RuleViolation::PastCheckInNotAllowed.reject();
                }
                // A checked-in session has no check-out yet; stray input
                // is normalized to the sentinel.
                Outcome::success(SessionRecord {
                    check_in,
                    check_out: epoch_min(),
                    status,
                })
            }
            SessionStatus::CheckedOut => {
                if previous != Some(SessionStatus::CheckedIn) {
                    return RuleViolation::CheckInRequiredBeforeCheckOut.reject();
                }
                if check_out <= check_in {
                    return RuleViolation::InvalidDateRange.reject();
                }
                if check_in > now {
                    return RuleViolation::InvalidStatusTransition.reject();
                }
                if now.signed_duration_since(check_in)
                    > Duration::seconds(FRESHNESS_WINDOW_SECONDS)
                {
                    return RuleViolation::StaleCheckIn.reject();
                }
                Outcome::success(SessionRecord {
                    check_in,
                    check_out,
                    status,
                })
            }
            SessionStatus::None => {
                if check_in != epoch_min() || check_out != epoch_min() {
                    return RuleViolation::InvalidNoneState.reject();
                }
                Outcome::success(SessionRecord {
                    check_in,
                    check_out,
                    status,
                })
            }
        }
    }

    /// Move the session to `new_status` at time `at`.
    ///
    /// The transition table is exhaustive and closed; the three legal
    /// moves delegate to [`create`](SessionRecord::create) and every
    /// other `(current, new)` pair fails with `InvalidStatusTransition`.
    pub fn transition_to<C: Clock>(
        &self,
        new_status: SessionStatus,
        at: DateTime<FixedOffset>,
        clock: &C,
    ) -> Outcome<SessionRecord> {
        let sentinel = epoch_min().fixed_offset();
        match (self.status, new_status) {
            (SessionStatus::None, SessionStatus::CheckedIn) => {
                Self::create(at, sentinel, SessionStatus::CheckedIn, None, clock)
            }
            (SessionStatus::CheckedIn, SessionStatus::CheckedOut) => Self::create(
                self.check_in.fixed_offset(),
                at,
                SessionStatus::CheckedOut,
                Some(SessionStatus::CheckedIn),
                clock,
            ),
            (SessionStatus::CheckedOut, SessionStatus::None) => {
                Self::create(sentinel, sentinel, SessionStatus::None, None, clock)
            }
            _ => RuleViolation::InvalidStatusTransition.reject(),
        }
    }

    /// Re-validate replacement fields against the current status.
    ///
    /// Runs [`create`](SessionRecord::create) with the receiver's
    /// status as `previous`. The receiver is never mutated; the result
    /// is a new record or a failure.
    pub fn update<C: Clock>(
        &self,
        check_in: DateTime<FixedOffset>,
        check_out: DateTime<FixedOffset>,
        status: SessionStatus,
        clock: &C,
    ) -> Outcome<SessionRecord> {
        Self::create(check_in, check_out, status, Some(self.status), clock)
    }

    /// Elapsed time between check-in and check-out.
    ///
    /// Zero for any status other than `CheckedOut`. Pure, no failure
    /// path.
    pub fn duration(&self) -> Duration {
        match self.status {
            SessionStatus::CheckedOut => self.check_out - self.check_in,
            _ => Duration::zero(),
        }
    }

    /// Whether the session is currently checked in: status `CheckedIn`,
    /// a real (post-sentinel) check-in, and a check-in not in the
    /// future.
    pub fn is_active<C: Clock>(&self, clock: &C) -> bool {
        self.status == SessionStatus::CheckedIn
            && self.check_in <= clock.utc()
            && self.check_in > epoch_min()
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

impl fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            SessionStatus::None => write!(f, "empty session"),
            SessionStatus::CheckedIn => {
                write!(f, "session checked in at {}", self.check_in)
            }
            SessionStatus::CheckedOut => write!(
                f,
                "session checked in at {}, checked out at {} ({}s elapsed)",
                self.check_in,
                self.check_out,
                self.duration().num_seconds()
            ),
        }
    }
}
