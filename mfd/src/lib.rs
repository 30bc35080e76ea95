//! libmfd - vendor-neutral access to multi-function devices
//!
//! This library lets a caller find out which protocol a networked copier
//! or printer speaks, hold an authenticated session with it and read its
//! address book through a canonical field schema.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `mfd-core`: Error type, session types, canonical fields and mapping
//! - `mfd-transport`: Directory service client contract and credentials
//! - `mfd-session`: Session state machine with bounded reopen
//! - `mfd-device`: Device types, autodetection, address books, backends
//!
//! # Usage
//!
//! ```rust,ignore
//! use mfd::{DeviceConfig, Manager, OpenRequest, Outcome, open_device};
//!
//! let manager = Manager::with_builtin_types(connector, DeviceConfig::default());
//! let request = OpenRequest::new("192.168.1.20").with_credentials("admin", "");
//! let code = match open_device(&manager, &request) {
//!     Ok(mut device) => {
//!         if let Some(mut book) = device.address_book() {
//!             let ids = book.entry_ids()?;
//!             for entry in book.entries(&ids)? {
//!                 println!("{}: {:?}", entry.id, entry.fields);
//!             }
//!         }
//!         Outcome::Ok
//!     }
//!     Err(e) => Outcome::from(&e),
//! };
//! std::process::exit(code.exit_code());
//! ```

pub mod command;

pub use command::{OpenRequest, Outcome, list_device_types, open_device, resolve_type};

// Re-export core types
pub use mfd_core::{
    AddressBookEntry, CanonicalField, EntryId, ErrorKind, FieldMap, FieldMapper, MfdError,
    MfdResult, SessionType,
};

// Re-export device API
pub use mfd_device::{
    AddressBook, Certainty, Device, DeviceConfig, DeviceConfigBuilder, DeviceType,
    DeviceTypeDescriptor, Manager, SessionOutcome,
};

pub mod device {
    pub use mfd_device::*;
}

pub mod session {
    pub use mfd_session::*;
}

pub mod transport {
    pub use mfd_transport::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfd_transport::{
        Connector, DirectoryClient, MockConnector, MockDirectoryClient, PropertyList,
        StartSessionReply,
    };
    use std::sync::Arc;

    fn ricoh_client() -> MockDirectoryClient {
        let mut client = MockDirectoryClient::new();
        client.expect_get_protocol_version().returning(|| Ok(303));
        client
            .expect_get_service_version()
            .returning(|| Ok(PropertyList::new()));
        client.expect_start_session().times(1).returning(|_, _, _| {
            Ok(StartSessionReply {
                status: "OK".into(),
                session_id: "s1".into(),
            })
        });
        client
            .expect_search_objects()
            .times(1)
            .returning(|_, _| Ok(vec![[("id", "12")].into_iter().collect()]));
        client.expect_get_objects_props().times(1).returning(|_, _, _| {
            Ok(vec![[("id", "12"), ("name", "Front desk"), ("mail:address", "desk@example.com")]
                .into_iter()
                .collect()])
        });
        client
            .expect_terminate_session()
            .withf(|id| id == "s1")
            .times(1)
            .returning(|_| Ok("OK".into()));
        client
    }

    #[test]
    fn test_open_and_list_builtin_device() {
        let mut connector = MockConnector::new();
        let mut clients = vec![ricoh_client(), {
            // Detection only asks for the protocol version.
            let mut detect = MockDirectoryClient::new();
            detect.expect_endpoint().return_const("http://mfd/DH/udirectory".to_string());
            detect.expect_get_protocol_version().times(1).returning(|| Ok(303));
            detect
        }];
        connector
            .expect_connect()
            .times(2)
            .returning(move |_| Ok(Box::new(clients.pop().unwrap()) as Box<dyn DirectoryClient>));
        let connector: Arc<dyn Connector> = Arc::new(connector);

        let manager = Manager::with_builtin_types(connector, DeviceConfig::default());
        let listing = list_device_types(&manager);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].code, "ricoh-aficio");

        let mut device = open_device(&manager, &OpenRequest::new("mfd")).unwrap();
        assert_eq!(device.session_type(), Some(SessionType::Shared));

        let mut book = device.address_book().unwrap();
        let ids = book.entry_ids().unwrap();
        assert_eq!(ids, vec!["entry:12"]);

        let entries = book.entries(&ids).unwrap();
        assert_eq!(entries[0].get(CanonicalField::Name), Some("Front desk"));
        assert_eq!(entries[0].get(CanonicalField::EmailAddress), Some("desk@example.com"));
    }

    #[test]
    fn test_unreachable_host_is_showstopper() {
        let mut connector = MockConnector::new();
        connector.expect_connect().times(1).returning(|_| {
            let mut client = MockDirectoryClient::new();
            client.expect_endpoint().return_const("http://mfd/DH/udirectory".to_string());
            client
                .expect_get_protocol_version()
                .returning(|| Err(MfdError::ConnectionFailure("no route to host".into())));
            Ok(Box::new(client) as Box<dyn DirectoryClient>)
        });
        let manager = Manager::with_builtin_types(Arc::new(connector), DeviceConfig::default());

        let err = open_device(&manager, &OpenRequest::new("mfd")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
        assert_eq!(Outcome::from(&err).exit_code(), 2);
    }
}
