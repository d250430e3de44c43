//! Session lifecycle value object and its validation rules.
//!
//! A session moves through `None -> CheckedIn -> CheckedOut -> None`.
//! Every construction and transition runs through
//! [`SessionRecord::create`], the single place where the business rules
//! (UTC provenance, timing windows, transition legality) are enforced,
//! and returns an [`Outcome`](crate::outcome::Outcome) rather than
//! throwing.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use mockable::DefaultClock;
//! use turnstile::session::{epoch_min, SessionRecord, SessionStatus};
//!
//! let clock = DefaultClock;
//! let checked_in = SessionRecord::create(
//!     (Utc::now() - Duration::seconds(2)).fixed_offset(),
//!     epoch_min().fixed_offset(),
//!     SessionStatus::CheckedIn,
//!     None,
//!     &clock,
//! )
//! .ensure_success();
//!
//! let checked_out = checked_in
//!     .transition_to(SessionStatus::CheckedOut, Utc::now().fixed_offset(), &clock)
//!     .ensure_success();
//! assert_eq!(checked_out.status(), SessionStatus::CheckedOut);
//! ```

pub mod record;
pub mod rules;
pub mod status;

// Re-export commonly used types
pub use record::{epoch_min, SessionRecord};
pub use rules::{RuleViolation, FRESHNESS_WINDOW_SECONDS, MAX_FUTURE_CHECK_IN_DAYS};
pub use status::SessionStatus;
