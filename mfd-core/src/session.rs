//! Session access levels

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Access level of an authenticated session with a device
///
/// The absence of a session is expressed as `Option<SessionType>::None`
/// wherever a held session is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// Read-only session; several clients may hold one at the same time
    Shared,
    /// Read/write session; the device grants it to one client at a time
    Exclusive,
}

impl SessionType {
    /// Check whether a session of this type allows reads
    pub const fn permits_read(&self) -> bool {
        true
    }

    /// Check whether a session of this type allows writes
    pub const fn permits_write(&self) -> bool {
        matches!(self, SessionType::Exclusive)
    }

    /// Check whether holding this type is enough for an operation that
    /// requires `required`
    pub const fn satisfies(&self, required: SessionType) -> bool {
        match required {
            SessionType::Shared => self.permits_read(),
            SessionType::Exclusive => self.permits_write(),
        }
    }

    /// Get human-readable type name
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Shared => "Shared",
            SessionType::Exclusive => "Exclusive",
        }
    }
}

impl Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
