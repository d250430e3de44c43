//! Session status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a session in its lifecycle.
///
/// The enumeration is closed: the legal flow is
/// `None -> CheckedIn -> CheckedOut -> None`, with no self-transitions
/// and no shortcuts, enforced by
/// [`SessionRecord::transition_to`](crate::session::SessionRecord::transition_to).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No session in progress; both timestamps sit at the sentinel.
    None,
    /// Checked in, not yet checked out.
    CheckedIn,
    /// Checked in and out; both timestamps are real.
    CheckedOut,
}

impl SessionStatus {
    /// Get the status's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::CheckedIn => "CheckedIn",
            Self::CheckedOut => "CheckedOut",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_correct_value() {
        assert_eq!(SessionStatus::None.name(), "None");
        assert_eq!(SessionStatus::CheckedIn.name(), "CheckedIn");
        assert_eq!(SessionStatus::CheckedOut.name(), "CheckedOut");
    }

    #[test]
    fn status_serializes_correctly() {
        let status = SessionStatus::CheckedIn;
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: SessionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }

    #[test]
    fn status_is_comparable() {
        assert_eq!(SessionStatus::CheckedOut, SessionStatus::CheckedOut);
        assert_ne!(SessionStatus::None, SessionStatus::CheckedIn);
    }
}
