//! Command-surface contract
//!
//! Front-ends (a CLI, a service endpoint) parse their own arguments into an
//! [`OpenRequest`] and turn errors into an [`Outcome`]. Exit codes follow the
//! usual `mfdmgr` convention.

use mfd_core::{ErrorKind, MfdError, MfdResult};
use mfd_device::{Device, DeviceType, DeviceTypeDescriptor, Manager};
use std::fmt;

/// Outcome category of a front-end run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ok,
    /// Missing or invalid parameters
    BadArgs,
    /// No session could be established, or the device could not be reached
    Showstopper,
    /// Autodetection failed; an explicit type is needed
    BeMoreSpecific,
}

impl Outcome {
    /// Process exit code for this outcome
    pub const fn exit_code(&self) -> i32 {
        match self {
            Outcome::Ok => 0,
            Outcome::BadArgs => 1,
            Outcome::Showstopper => 2,
            Outcome::BeMoreSpecific => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::BadArgs => "bad arguments",
            Outcome::Showstopper => "showstopper",
            Outcome::BeMoreSpecific => "be more specific",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&MfdError> for Outcome {
    fn from(error: &MfdError) -> Self {
        match error.kind() {
            ErrorKind::BadParameters | ErrorKind::NotImplemented => Outcome::BadArgs,
            ErrorKind::AmbiguousType => Outcome::BeMoreSpecific,
            ErrorKind::ConnectionFailure
            | ErrorKind::SessionRejected
            | ErrorKind::SessionUnavailable
            | ErrorKind::ProtocolFault => Outcome::Showstopper,
        }
    }
}

impl<T> From<&MfdResult<T>> for Outcome {
    fn from(result: &MfdResult<T>) -> Self {
        match result {
            Ok(_) => Outcome::Ok,
            Err(e) => Outcome::from(e),
        }
    }
}

/// Parameters needed to open a device
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OpenRequest {
    pub hostname: String,
    pub username: String,
    pub password: String,
    /// Device type code; `None` autodetects
    pub type_code: Option<String>,
}

impl OpenRequest {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_type(mut self, code: impl Into<String>) -> Self {
        self.type_code = Some(code.into());
        self
    }
}

impl fmt::Debug for OpenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRequest")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("type_code", &self.type_code)
            .finish()
    }
}

/// Resolve the device type of a request
///
/// # Errors
/// - `InvalidData` if the hostname is empty or the type code is unknown
/// - `AmbiguousType` if autodetection found nothing
pub fn resolve_type<'m>(
    manager: &'m Manager,
    request: &OpenRequest,
) -> MfdResult<&'m dyn DeviceType> {
    if request.hostname.is_empty() {
        return Err(MfdError::InvalidData("No hostname given".to_string()));
    }

    match request.type_code.as_deref() {
        Some(code) => manager
            .get_by_code(code)
            .ok_or_else(|| MfdError::InvalidData(format!("Unknown device type: {}", code))),
        None => manager.autodetect(&request.hostname),
    }
}

/// Open the device a request names and require a session on it
///
/// # Errors
/// - everything [`resolve_type`] returns
/// - `ConnectionFailure` if the device cannot be reached
/// - `SessionRejected` if the device refused every session
pub fn open_device(manager: &Manager, request: &OpenRequest) -> MfdResult<Box<dyn Device>> {
    let device_type = resolve_type(manager, request)?;
    log::info!("Opening {} as type {}", request.hostname, device_type.descriptor());

    let device = device_type.open(&request.hostname, &request.username, &request.password)?;
    if device.session_type().is_none() {
        return Err(MfdError::SessionRejected(format!(
            "{} refused the session (bad password or device busy)",
            request.hostname
        )));
    }
    Ok(device)
}

/// Descriptors of every registered device type, for `--type` listings
pub fn list_device_types(manager: &Manager) -> Vec<DeviceTypeDescriptor> {
    manager.descriptors()
}
