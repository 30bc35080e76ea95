//! Device trait

use crate::address_book::AddressBook;
use crate::descriptor::DeviceTypeDescriptor;
use mfd_core::{MfdResult, SessionType};
use mfd_session::SessionOutcome;

/// One connected multi-function device
///
/// A device exclusively owns its connection and session. Dropping it
/// closes a held session once, ignoring failure. A device without a
/// session has no session id to terminate, so dropping it sends nothing.
/// Calls must be serialized by the caller.
pub trait Device: Send {
    /// Type this device was opened as
    fn descriptor(&self) -> &DeviceTypeDescriptor;

    fn hostname(&self) -> &str;

    /// Type of the session currently held, if any
    fn session_type(&self) -> Option<SessionType>;

    /// Switch to a session of the given type, retrying for up to
    /// `timeout_secs` while the device refuses
    fn reopen_session(
        &mut self,
        session_type: SessionType,
        timeout_secs: u32,
    ) -> MfdResult<SessionOutcome>;

    /// Close the held session
    fn close_session(&mut self) -> MfdResult<()>;

    /// Address book of this device, or `None` if the type has none
    fn address_book(&mut self) -> Option<Box<dyn AddressBook + '_>>;
}
