//! Vendor hooks for starting and terminating sessions

use mfd_core::{MfdResult, SessionType};

/// Remote calls a [`SessionController`](crate::SessionController) drives
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionProtocol: Send {
    /// Ask the device for a session of the given type
    ///
    /// # Returns
    /// `Some(session_id)` if the device granted the session, `None` if it
    /// refused. A refusal may mean bad credentials or a busy device.
    ///
    /// # Errors
    /// `ConnectionFailure` or `ProtocolFault` if the request itself failed
    fn start_session(&mut self, session_type: SessionType) -> MfdResult<Option<String>>;

    /// Ask the device to end a session
    ///
    /// # Errors
    /// `ProtocolFault` if the device rejected the termination request
    fn terminate_session(&mut self, session_id: &str) -> MfdResult<()>;
}
