//! Session state machine

use mfd_core::SessionType;
use std::fmt::{self, Display};

/// Session state of one device
///
/// # State Transitions
/// ```text
/// Closed -> Shared | Exclusive    (open succeeded)
/// Shared | Exclusive -> Closed    (close)
/// ```
///
/// Switching between `Shared` and `Exclusive` always passes through
/// `Closed`; `reopen` performs both steps. `Closed` is the initial state and
/// can be entered any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No session held (initial state, or after close)
    #[default]
    Closed,
    /// Read-only session held
    Shared,
    /// Read/write session held
    Exclusive,
}

impl SessionState {
    /// Type of the session held, if any
    pub const fn session_type(&self) -> Option<SessionType> {
        match self {
            SessionState::Closed => None,
            SessionState::Shared => Some(SessionType::Shared),
            SessionState::Exclusive => Some(SessionType::Exclusive),
        }
    }

    pub const fn is_open(&self) -> bool {
        !matches!(self, SessionState::Closed)
    }

    /// Check whether the held session is enough for `required`
    pub const fn satisfies(&self, required: SessionType) -> bool {
        match self.session_type() {
            Some(held) => held.satisfies(required),
            None => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Closed => "Closed",
            SessionState::Shared => "Shared",
            SessionState::Exclusive => "Exclusive",
        }
    }
}

impl From<SessionType> for SessionState {
    fn from(session_type: SessionType) -> Self {
        match session_type {
            SessionType::Shared => SessionState::Shared,
            SessionType::Exclusive => SessionState::Exclusive,
        }
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a session open or reopen
///
/// A rejected session is an expected outcome, so it is reported here
/// instead of as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The device granted the session
    Established,
    /// The device refused: bad credentials or busy, indistinguishably
    Rejected,
}

impl SessionOutcome {
    pub const fn is_established(&self) -> bool {
        matches!(self, SessionOutcome::Established)
    }
}
