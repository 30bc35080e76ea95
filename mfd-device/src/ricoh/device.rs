//! Ricoh Aficio device

use super::address_book::UDirectoryAddressBook;
use super::fields::FIELD_MAPPER;
use super::session::UDirectorySession;
use crate::address_book::AddressBook;
use crate::config::DeviceConfig;
use crate::descriptor::DeviceTypeDescriptor;
use crate::device::Device;
use mfd_core::{EntryId, FieldMapper, MfdError, MfdResult, SessionType};
use mfd_session::{SessionController, SessionOutcome};
use mfd_transport::{DirectoryClient, PropertyList, SessionCredentials};

/// A connected Ricoh Aficio device
pub struct RicohAficioDevice {
    descriptor: DeviceTypeDescriptor,
    hostname: String,
    session: SessionController<UDirectorySession>,
    mapper: FieldMapper,
    page_size: u32,
    entry_ids: Option<Vec<EntryId>>,
}

impl RicohAficioDevice {
    /// Check the device, then open a shared session
    ///
    /// # Errors
    /// - `ConnectionFailure` if the protocol version cannot be read
    /// - errors from the session start request
    ///
    /// A refused session is not an error: the device is returned without
    /// a session.
    pub fn connect(
        descriptor: DeviceTypeDescriptor,
        hostname: &str,
        mut client: Box<dyn DirectoryClient>,
        credentials: SessionCredentials,
        config: &DeviceConfig,
    ) -> MfdResult<Self> {
        let version = client.get_protocol_version().map_err(|e| {
            MfdError::ConnectionFailure(format!(
                "Unable to contact {} via the directory service: {}",
                client.endpoint(),
                e
            ))
        })?;
        if !config.supported_protocol_versions.contains(&version) {
            log::warn!("This device is using an unknown protocol version {}", version);
        }

        match client.get_service_version() {
            Ok(props) => log::info!("Service version response: {}", describe(&props)),
            Err(e) => log::warn!("Unable to read the service version: {}", e),
        }

        let protocol = UDirectorySession::new(client, credentials, config.session_timeout_secs);
        let mut session = SessionController::new(protocol, config.session_config());
        if session.open(SessionType::Shared)? == SessionOutcome::Rejected {
            log::warn!("Unable to log in to {} (bad password or device busy)", hostname);
        }

        Ok(Self {
            descriptor,
            hostname: hostname.to_string(),
            session,
            mapper: FIELD_MAPPER,
            page_size: config.page_size,
            entry_ids: None,
        })
    }

    /// Session controller of this device
    pub fn session(&self) -> &SessionController<UDirectorySession> {
        &self.session
    }
}

fn describe(props: &PropertyList) -> String {
    props
        .pairs()
        .map(|(name, value)| format!("{}={}; ", name, value))
        .collect()
}

impl Device for RicohAficioDevice {
    fn descriptor(&self) -> &DeviceTypeDescriptor {
        &self.descriptor
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn session_type(&self) -> Option<SessionType> {
        self.session.session_type()
    }

    fn reopen_session(
        &mut self,
        session_type: SessionType,
        timeout_secs: u32,
    ) -> MfdResult<SessionOutcome> {
        self.session.reopen(session_type, timeout_secs)
    }

    fn close_session(&mut self) -> MfdResult<()> {
        self.session.close()
    }

    fn address_book(&mut self) -> Option<Box<dyn AddressBook + '_>> {
        Some(Box::new(UDirectoryAddressBook::new(
            &mut self.session,
            &mut self.entry_ids,
            self.mapper,
            self.page_size,
        )))
    }
}
