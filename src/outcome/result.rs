//! The outcome container and its composition operators.

use super::detail::{ErrorCategory, ErrorDetail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Payload of a failed outcome: a category plus at least one error.
///
/// # Panics
///
/// Construction panics if the category is [`ErrorCategory::None`] or
/// the error list is empty; both indicate a bug in the calling code.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Failure {
    category: ErrorCategory,
    errors: Vec<ErrorDetail>,
}

impl Failure {
    /// Create a failure payload from a category and an ordered error list.
    pub fn new(category: ErrorCategory, errors: Vec<ErrorDetail>) -> Self {
        assert!(
            category != ErrorCategory::None,
            "failure category must not be None"
        );
        assert!(!errors.is_empty(), "failure requires at least one error");
        Self { category, errors }
    }

    /// Create a failure payload carrying a single error.
    pub fn single(category: ErrorCategory, error: ErrorDetail) -> Self {
        Self::new(category, vec![error])
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The errors in the order they were recorded. Never empty.
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ErrorDetail> {
        self.errors
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.category)?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(error.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

/// Result of an operation that can fail for an expected, recoverable
/// reason.
///
/// Outcomes are immutable once constructed: exactly one of the success
/// value and the failure payload is populated, and the reported
/// [`category`](Outcome::category) is [`ErrorCategory::None`] iff the
/// outcome is a success.
///
/// # Example
///
/// ```rust
/// use turnstile::outcome::{ErrorCategory, ErrorDetail, Outcome};
///
/// fn half(n: i32) -> Outcome<i32> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure(
///             ErrorCategory::Validation,
///             ErrorDetail::new("OddInput", "input must be even"),
///         )
///     }
/// }
///
/// let quarter = half(44).bind(half);
/// assert_eq!(quarter.value(), Some(&11));
///
/// let failed = half(3).bind(half);
/// assert_eq!(failed.errors()[0].code(), "OddInput");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with a categorized, non-empty error list.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Create a success outcome.
    ///
    /// A `Success` always holds a value; absence is unrepresentable by
    /// type, so no runtime null-check exists or is needed.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Create a failure outcome carrying a single error.
    ///
    /// # Panics
    ///
    /// Panics if `category` is [`ErrorCategory::None`] (see
    /// [`Failure::new`]).
    pub fn failure(category: ErrorCategory, error: ErrorDetail) -> Self {
        Self::Failure(Failure::single(category, error))
    }

    /// Create a failure outcome carrying an ordered list of errors.
    ///
    /// # Panics
    ///
    /// Panics if `category` is [`ErrorCategory::None`] or `errors` is
    /// empty.
    pub fn failures(category: ErrorCategory, errors: Vec<ErrorDetail>) -> Self {
        Self::Failure(Failure::new(category, errors))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The failure category, or [`ErrorCategory::None`] on success.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Success(_) => ErrorCategory::None,
            Self::Failure(failure) => failure.category(),
        }
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The errors of a failure; empty slice on success.
    pub fn errors(&self) -> &[ErrorDetail] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(failure) => failure.errors(),
        }
    }

    /// Monadic composition: apply `f` to the success value, or
    /// propagate the failure payload unchanged.
    ///
    /// `f` is never invoked on a failure; there is no partial execution.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Map the success value into a new success; failures propagate
    /// unchanged.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Asynchronous [`bind`](Outcome::bind): `f` is a suspending
    /// computation producing the next outcome.
    ///
    /// On failure the computation is never constructed or awaited.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Asynchronous [`map`](Outcome::map): `f` is a suspending
    /// computation producing the mapped value.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Return the value, escalating a failure to a panic.
    ///
    /// This is the deliberate bridge from an expected failure to a
    /// program fault, for call sites (tests, top-level handlers) that
    /// treat failure as fatal. The panic message carries every error.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure outcome.
    pub fn ensure_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => {
                panic!("ensure_success called on a failure outcome ({failure})")
            }
        }
    }

    /// Non-panicking extraction of either payload.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl Outcome<()> {
    /// A valueless success.
    pub fn done() -> Self {
        Self::Success(())
    }

    /// Aggregate valueless outcomes: success iff every input succeeds.
    ///
    /// On any failure the result is a failure with category
    /// [`ErrorCategory::Aggregate`] whose errors concatenate, in input
    /// order, every failing outcome's errors. Nothing is dropped, so a
    /// caller can report all violations at once rather than only the
    /// first.
    pub fn combine<I>(outcomes: I) -> Outcome<()>
    where
        I: IntoIterator<Item = Outcome<()>>,
    {
        let mut collected: Vec<ErrorDetail> = Vec::new();
        for outcome in outcomes {
            if let Outcome::Failure(failure) = outcome {
                collected.extend(failure.into_errors());
            }
        }
        if collected.is_empty() {
            Outcome::done()
        } else {
            Outcome::failures(ErrorCategory::Aggregate, collected)
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}
