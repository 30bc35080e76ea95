//! Device type registry and autodetection
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use mfd_device::{DeviceConfig, Manager};
//!
//! let manager = Manager::with_builtin_types(connector, DeviceConfig::default());
//! let device_type = match manager.autodetect("192.168.1.20") {
//!     Ok(t) => t,
//!     Err(e) => return Err(e), // AmbiguousType: ask for an explicit type
//! };
//! let mut device = device_type.open("192.168.1.20", "admin", "")?;
//! ```

use crate::config::DeviceConfig;
use crate::descriptor::DeviceTypeDescriptor;
use crate::device_type::DeviceType;
use crate::ricoh::RicohAficioType;
use mfd_core::{MfdError, MfdResult};
use mfd_transport::Connector;
use std::sync::Arc;

/// Ordered collection of supported device types
///
/// Types keep their registration order. The registry is filled while it
/// is built and only read afterwards, so a shared reference can be used
/// from several threads.
#[derive(Default)]
pub struct Manager {
    types: Vec<Box<dyn DeviceType>>,
}

impl Manager {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every device type compiled into this crate
    pub fn with_builtin_types(connector: Arc<dyn Connector>, config: DeviceConfig) -> Self {
        Self::new().with_type(RicohAficioType::new(connector, config))
    }

    /// Append a device type
    ///
    /// Codes are not checked for uniqueness; a later type with a code
    /// already registered is reachable by index only.
    pub fn with_type<T: DeviceType + 'static>(mut self, device_type: T) -> Self {
        self.types.push(Box::new(device_type));
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Get the device type at `index`, or `None` once out of range
    pub fn get_by_index(&self, index: usize) -> Option<&dyn DeviceType> {
        self.types.get(index).map(|t| t.as_ref())
    }

    /// Get the first registered device type with the given code
    pub fn get_by_code(&self, code: &str) -> Option<&dyn DeviceType> {
        self.iter().find(|t| t.code() == code)
    }

    /// Iterate over device types in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DeviceType> {
        self.types.iter().map(|t| t.as_ref())
    }

    /// Descriptors of all device types in registration order
    pub fn descriptors(&self) -> Vec<DeviceTypeDescriptor> {
        self.iter().map(|t| t.descriptor().clone()).collect()
    }

    /// Find the device type of a host
    ///
    /// Probes each type in registration order and stops at the first
    /// `DefinitelyYes`; later types are not probed.
    ///
    /// # Errors
    /// - `AmbiguousType` if no type answered `DefinitelyYes`
    /// - the probe's error if a probe could not be attempted
    pub fn autodetect(&self, hostname: &str) -> MfdResult<&dyn DeviceType> {
        for device_type in self.iter() {
            let certainty = device_type.is_instance(hostname)?;
            log::debug!("{} is {}: {}", hostname, device_type.descriptor(), certainty);
            if certainty.is_yes() {
                log::info!("Device is definitely a {}", device_type.descriptor());
                return Ok(device_type);
            }
        }
        Err(MfdError::AmbiguousType {
            hostname: hostname.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certainty::Certainty;
    use crate::device::Device;
    use mfd_core::ErrorKind;
    use std::sync::Mutex;

    /// Device type answering probes from a script and recording calls
    struct FakeType {
        descriptor: DeviceTypeDescriptor,
        verdict: Option<Certainty>,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl FakeType {
        fn new(code: &str, verdict: Option<Certainty>, log: &Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                descriptor: DeviceTypeDescriptor::new(code, format!("Fake {}", code)),
                verdict,
                log: Arc::clone(log),
            }
        }
    }

    impl DeviceType for FakeType {
        fn descriptor(&self) -> &DeviceTypeDescriptor {
            &self.descriptor
        }

        fn is_instance(&self, _hostname: &str) -> MfdResult<Certainty> {
            self.log.lock().unwrap().push(format!("probe {}", self.descriptor.code));
            self.verdict
                .ok_or_else(|| MfdError::ConnectionFailure("unreachable".to_string()))
        }

        fn open(
            &self,
            _hostname: &str,
            _username: &str,
            _password: &str,
        ) -> MfdResult<Box<dyn Device>> {
            self.log.lock().unwrap().push(format!("open {}", self.descriptor.code));
            Err(MfdError::ConnectionFailure("fake types cannot open".to_string()))
        }
    }

    fn call_log() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn test_get_by_index() {
        let log = call_log();
        let manager = Manager::new()
            .with_type(FakeType::new("a", Some(Certainty::DefinitelyNo), &log))
            .with_type(FakeType::new("b", Some(Certainty::DefinitelyNo), &log));

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get_by_index(0).unwrap().code(), "a");
        assert_eq!(manager.get_by_index(1).unwrap().code(), "b");
        assert!(manager.get_by_index(2).is_none());
    }

    #[test]
    fn test_get_by_code_returns_first_match() {
        let log = call_log();
        let first = FakeType::new("dup", Some(Certainty::DefinitelyNo), &log);
        let mut second = FakeType::new("dup", Some(Certainty::DefinitelyNo), &log);
        second.descriptor.friendly_name = "Second".to_string();
        let manager = Manager::new()
            .with_type(FakeType::new("x", Some(Certainty::DefinitelyNo), &log))
            .with_type(first)
            .with_type(second);

        assert_eq!(manager.get_by_code("dup").unwrap().friendly_name(), "Fake dup");
        assert_eq!(manager.get_by_index(2).unwrap().friendly_name(), "Second");
        assert!(manager.get_by_code("missing").is_none());
    }

    #[test]
    fn test_autodetect_stops_at_first_yes() {
        let log = call_log();
        let manager = Manager::new()
            .with_type(FakeType::new("a", Some(Certainty::DefinitelyNo), &log))
            .with_type(FakeType::new("b", Some(Certainty::DefinitelyYes), &log))
            .with_type(FakeType::new("c", Some(Certainty::DefinitelyYes), &log));

        let selected = manager.autodetect("mfd.local").unwrap();

        assert_eq!(selected.code(), "b");
        assert_eq!(*log.lock().unwrap(), vec!["probe a", "probe b"]);
    }

    #[test]
    fn test_autodetect_all_no_is_ambiguous() {
        let log = call_log();
        let manager = Manager::new()
            .with_type(FakeType::new("a", Some(Certainty::DefinitelyNo), &log))
            .with_type(FakeType::new("b", Some(Certainty::DefinitelyNo), &log));

        let err = manager.autodetect("mfd.local").err().unwrap();

        assert_eq!(err.kind(), ErrorKind::AmbiguousType);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_autodetect_empty_registry_is_ambiguous() {
        let err = Manager::new().autodetect("mfd.local").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::AmbiguousType);
    }

    #[test]
    fn test_autodetect_detection_failure_propagates() {
        let log = call_log();
        let manager = Manager::new()
            .with_type(FakeType::new("a", None, &log))
            .with_type(FakeType::new("b", Some(Certainty::DefinitelyYes), &log));

        let err = manager.autodetect("mfd.local").err().unwrap();

        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
        assert_eq!(*log.lock().unwrap(), vec!["probe a"]);
    }

    #[test]
    fn test_descriptors_keep_registration_order() {
        let log = call_log();
        let manager = Manager::new()
            .with_type(FakeType::new("z", None, &log))
            .with_type(FakeType::new("a", None, &log));

        let codes: Vec<String> = manager.descriptors().into_iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["z", "a"]);
    }
}
