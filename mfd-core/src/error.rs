use crate::session::SessionType;
use thiserror::Error;

/// Main error type for device management operations
///
/// Every fallible operation in the workspace returns this type, so callers
/// branch on [`MfdError::kind`] instead of on call-site conventions.
#[derive(Error, Debug)]
pub enum MfdError {
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    #[error("Connection failure: {0}")]
    Io(#[from] std::io::Error),

    /// The remote refused to start a session.
    ///
    /// The remote protocol reports bad credentials and a busy device through
    /// the same signal, so no attempt is made to tell them apart.
    #[error("Session rejected: {0}")]
    SessionRejected(String),

    #[error("Unable to determine the device type of {hostname}")]
    AmbiguousType { hostname: String },

    #[error("Session unavailable: {required} session required, {}", held_description(.held))]
    SessionUnavailable {
        required: SessionType,
        held: Option<SessionType>,
    },

    #[error("Protocol fault: {0}")]
    ProtocolFault(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

fn held_description(held: &Option<SessionType>) -> String {
    match held {
        Some(session_type) => format!("{} session held", session_type),
        None => "no session held".to_string(),
    }
}

/// Flat classification of [`MfdError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConnectionFailure,
    SessionRejected,
    AmbiguousType,
    SessionUnavailable,
    ProtocolFault,
    NotImplemented,
    /// Missing or malformed caller input
    BadParameters,
}

impl MfdError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MfdError::ConnectionFailure(_) | MfdError::Io(_) => ErrorKind::ConnectionFailure,
            MfdError::SessionRejected(_) => ErrorKind::SessionRejected,
            MfdError::AmbiguousType { .. } => ErrorKind::AmbiguousType,
            MfdError::SessionUnavailable { .. } => ErrorKind::SessionUnavailable,
            MfdError::ProtocolFault(_) => ErrorKind::ProtocolFault,
            MfdError::NotImplemented(_) => ErrorKind::NotImplemented,
            MfdError::InvalidData(_) => ErrorKind::BadParameters,
        }
    }
}

/// Result type alias for device management operations
pub type MfdResult<T> = Result<T, MfdError>;
