//! Outcome type for expected, recoverable failures.
//!
//! An [`Outcome`] replaces exceptions as the return contract for every
//! operation that can fail for a business reason: it carries either a
//! value or a categorized, non-empty list of structured errors.
//!
//! # Philosophy
//!
//! Expected failures are values. Only programming errors (constructing
//! an outcome with invalid internal state) panic, and those panics mark
//! bugs in the calling code, not business conditions.
//!
//! # Example
//!
//! ```rust
//! use turnstile::outcome::{ErrorCategory, ErrorDetail, Outcome};
//!
//! let parsed: Outcome<i32> = Outcome::success(21);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.value(), Some(&42));
//!
//! let missing: Outcome<i32> = Outcome::failure(
//!     ErrorCategory::NotFound,
//!     ErrorDetail::new("SessionMissing", "no session with that id"),
//! );
//! assert!(missing.is_failure());
//! assert_eq!(missing.errors()[0].code(), "SessionMissing");
//! ```

pub mod detail;
pub mod result;

// Re-export commonly used types
pub use detail::{ErrorCategory, ErrorDetail};
pub use result::{Failure, Outcome};
