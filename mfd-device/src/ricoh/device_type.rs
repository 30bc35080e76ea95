//! Ricoh Aficio device type

use super::device::RicohAficioDevice;
use crate::certainty::Certainty;
use crate::config::DeviceConfig;
use crate::descriptor::DeviceTypeDescriptor;
use crate::device::Device;
use crate::device_type::DeviceType;
use mfd_core::{ErrorKind, MfdResult};
use mfd_transport::{Connector, SessionCredentials};
use std::sync::Arc;

pub const CODE: &str = "ricoh-aficio";
pub const FRIENDLY_NAME: &str = "Ricoh Aficio-compatible";

/// Devices speaking the Ricoh uDirectory protocol
pub struct RicohAficioType {
    descriptor: DeviceTypeDescriptor,
    connector: Arc<dyn Connector>,
    config: DeviceConfig,
}

impl RicohAficioType {
    pub fn new(connector: Arc<dyn Connector>, config: DeviceConfig) -> Self {
        Self {
            descriptor: DeviceTypeDescriptor::new(CODE, FRIENDLY_NAME),
            connector,
            config,
        }
    }
}

impl DeviceType for RicohAficioType {
    fn descriptor(&self) -> &DeviceTypeDescriptor {
        &self.descriptor
    }

    /// Any answer to a protocol version request identifies the device
    ///
    /// An unreachable host is an error; a fault from a reachable host is
    /// `DefinitelyNo`.
    fn is_instance(&self, hostname: &str) -> MfdResult<Certainty> {
        let mut client = self.connector.connect(hostname)?;
        match client.get_protocol_version() {
            Ok(version) => {
                log::debug!("{} answered protocol version {}", client.endpoint(), version);
                Ok(Certainty::DefinitelyYes)
            }
            Err(e) if e.kind() == ErrorKind::ConnectionFailure => Err(e),
            Err(e) => {
                log::debug!("{} did not answer a version request: {}", client.endpoint(), e);
                Ok(Certainty::DefinitelyNo)
            }
        }
    }

    fn open(
        &self,
        hostname: &str,
        username: &str,
        password: &str,
    ) -> MfdResult<Box<dyn Device>> {
        let client = self.connector.connect(hostname)?;
        let device = RicohAficioDevice::connect(
            self.descriptor.clone(),
            hostname,
            client,
            SessionCredentials::new(username, password),
            &self.config,
        )?;
        Ok(Box::new(device))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfd_core::{MfdError, SessionType};
    use mfd_transport::{
        DirectoryClient, MockConnector, MockDirectoryClient, PropertyList, StartSessionReply,
    };

    fn connector_for(client: MockDirectoryClient) -> Arc<dyn Connector> {
        let mut connector = MockConnector::new();
        connector
            .expect_connect()
            .withf(|host| host == "10.0.0.5")
            .times(1)
            .return_once(move |_| Ok(Box::new(client) as Box<dyn DirectoryClient>));
        Arc::new(connector)
    }

    fn endpoint(client: &mut MockDirectoryClient) {
        client
            .expect_endpoint()
            .return_const("http://10.0.0.5/DH/udirectory".to_string());
    }

    #[test]
    fn test_descriptor() {
        let device_type =
            RicohAficioType::new(Arc::new(MockConnector::new()), DeviceConfig::default());
        assert_eq!(device_type.code(), "ricoh-aficio");
        assert_eq!(device_type.friendly_name(), "Ricoh Aficio-compatible");
    }

    #[test]
    fn test_is_instance_yes() {
        let mut client = MockDirectoryClient::new();
        endpoint(&mut client);
        client.expect_get_protocol_version().times(1).returning(|| Ok(303));
        client.expect_start_session().never();

        let device_type = RicohAficioType::new(connector_for(client), DeviceConfig::default());
        assert_eq!(device_type.is_instance("10.0.0.5").unwrap(), Certainty::DefinitelyYes);
    }

    #[test]
    fn test_is_instance_no() {
        let mut client = MockDirectoryClient::new();
        endpoint(&mut client);
        client
            .expect_get_protocol_version()
            .returning(|| Err(MfdError::ProtocolFault("404 Not Found".into())));

        let device_type = RicohAficioType::new(connector_for(client), DeviceConfig::default());
        assert_eq!(device_type.is_instance("10.0.0.5").unwrap(), Certainty::DefinitelyNo);
    }

    #[test]
    fn test_is_instance_transport_error() {
        let mut client = MockDirectoryClient::new();
        endpoint(&mut client);
        client
            .expect_get_protocol_version()
            .times(1)
            .returning(|| Err(MfdError::ConnectionFailure("no route to host".into())));

        let device_type = RicohAficioType::new(connector_for(client), DeviceConfig::default());
        let err = device_type.is_instance("10.0.0.5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    }

    #[test]
    fn test_autodetect_unreachable_host_is_connection_failure() {
        let mut client = MockDirectoryClient::new();
        endpoint(&mut client);
        client
            .expect_get_protocol_version()
            .returning(|| Err(MfdError::ConnectionFailure("no route to host".into())));

        let manager =
            crate::Manager::with_builtin_types(connector_for(client), DeviceConfig::default());
        let err = manager.autodetect("10.0.0.5").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    }

    #[test]
    fn test_is_instance_connector_failure() {
        let mut connector = MockConnector::new();
        connector
            .expect_connect()
            .returning(|_| Err(MfdError::ConnectionFailure("bad hostname".into())));

        let device_type = RicohAficioType::new(Arc::new(connector), DeviceConfig::default());
        let err = device_type.is_instance("10.0.0.5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    }

    #[test]
    fn test_open_passes_credentials() {
        let mut client = MockDirectoryClient::new();
        client.expect_get_protocol_version().returning(|| Ok(302));
        client
            .expect_get_service_version()
            .returning(|| Ok(PropertyList::new()));
        client
            .expect_start_session()
            .withf(|info, timeout, mode| {
                info == "SCHEME=QkFTSUM=;UID:UserName=c2Nhbg==;PWD:Password=c2VjcmV0"
                    && *timeout == 30
                    && mode == "S"
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(StartSessionReply {
                    status: "OK".into(),
                    session_id: "42".into(),
                })
            });
        client
            .expect_terminate_session()
            .withf(|id| id == "42")
            .times(1)
            .returning(|_| Ok("OK".into()));

        let device_type = RicohAficioType::new(connector_for(client), DeviceConfig::default());
        let device = device_type.open("10.0.0.5", "scan", "secret").unwrap();

        assert_eq!(device.session_type(), Some(SessionType::Shared));
        assert_eq!(device.descriptor().code, CODE);
        assert_eq!(device.hostname(), "10.0.0.5");
    }
}
