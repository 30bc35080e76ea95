//! Device type trait

use crate::certainty::Certainty;
use crate::descriptor::DeviceTypeDescriptor;
use crate::device::Device;
use mfd_core::MfdResult;

/// Detection and factory for one vendor protocol
///
/// Implementations are registered once in a [`Manager`](crate::Manager)
/// and shared read-only afterwards.
pub trait DeviceType: Send + Sync {
    fn descriptor(&self) -> &DeviceTypeDescriptor;

    /// Short code identifying this type, e.g. for a `--type` option
    fn code(&self) -> &str {
        &self.descriptor().code
    }

    fn friendly_name(&self) -> &str {
        &self.descriptor().friendly_name
    }

    /// Probe a host to see whether it speaks this protocol
    ///
    /// Sends one lightweight request and never starts a session.
    ///
    /// # Errors
    /// `ConnectionFailure` if the probe could not be attempted at all. A
    /// device that answers but is not of this type is `DefinitelyNo`, not
    /// an error.
    fn is_instance(&self, hostname: &str) -> MfdResult<Certainty>;

    /// Connect to a device and establish the initial session
    ///
    /// Calling this without a prior positive [`is_instance`](Self::is_instance)
    /// is allowed and forces the device to be treated as this type; the
    /// backend may then fail early.
    ///
    /// The returned device may hold no session if the device refused it;
    /// check [`Device::session_type`].
    ///
    /// # Errors
    /// `ConnectionFailure` if the device cannot be reached
    fn open(&self, hostname: &str, username: &str, password: &str) -> MfdResult<Box<dyn Device>>;
}
