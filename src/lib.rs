//! Turnstile: a session check-in/check-out lifecycle built on outcomes
//!
//! Turnstile follows a "pure core" philosophy: the lifecycle logic is
//! composed of pure functions over immutable values, and every expected
//! failure is a value too. Operations never throw for business-rule
//! violations; they return an [`Outcome`] that is either a new session
//! record or a non-empty list of structured errors.
//!
//! # Core Concepts
//!
//! - **Outcome**: uniform success/failure container with monadic
//!   composition (`bind`/`map`, sync and async)
//! - **SessionRecord**: immutable value object whose constructor is the
//!   sole place the business rules live
//! - **RuleViolation**: one stable error code per validation rule, so
//!   callers branch on cause rather than on message text
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use mockable::DefaultClock;
//! use turnstile::session::{epoch_min, SessionRecord, SessionStatus};
//!
//! let clock = DefaultClock;
//! let outcome = SessionRecord::create(
//!     Utc::now().fixed_offset(),
//!     epoch_min().fixed_offset(),
//!     SessionStatus::CheckedIn,
//!     None,
//!     &clock,
//! );
//! assert!(outcome.is_success());
//! ```

pub mod outcome;
pub mod session;

// Re-export commonly used types
pub use outcome::{ErrorCategory, ErrorDetail, Failure, Outcome};
pub use session::{RuleViolation, SessionRecord, SessionStatus};
