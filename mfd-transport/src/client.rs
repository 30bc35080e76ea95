//! Directory RPC client traits
//!
//! A [`DirectoryClient`] is bound to one device and performs one blocking
//! call at a time. Implementations report transport problems (host
//! unreachable, HTTP failure) as [`MfdError::ConnectionFailure`] and
//! application-level faults returned by a reachable device as
//! [`MfdError::ProtocolFault`].
//!
//! [`MfdError::ConnectionFailure`]: mfd_core::MfdError::ConnectionFailure
//! [`MfdError::ProtocolFault`]: mfd_core::MfdError::ProtocolFault

use crate::types::{PropertyList, SearchRequest, StartSessionReply};
use mfd_core::{EntryId, MfdResult};

/// Synchronous client for a device's directory service
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait DirectoryClient: Send {
    /// Endpoint URL this client talks to
    fn endpoint(&self) -> String;

    /// Query the protocol version the device speaks
    ///
    /// Needs no session and has no side effects on the device, which makes
    /// it suitable as a detection probe.
    fn get_protocol_version(&mut self) -> MfdResult<i32>;

    /// Query the service version properties
    fn get_service_version(&mut self) -> MfdResult<PropertyList>;

    /// Ask the device to start a session
    ///
    /// # Arguments
    /// * `session_info` - Encoded credentials, see
    ///   [`SessionCredentials`](crate::SessionCredentials)
    /// * `timeout_secs` - Idle timeout after which the device drops the session
    /// * `lock_mode` - `"S"` for shared or `"X"` for exclusive access
    ///
    /// # Returns
    /// The device's verdict. A refusal is a normal reply, not an error.
    fn start_session(
        &mut self,
        session_info: &str,
        timeout_secs: u32,
        lock_mode: &str,
    ) -> MfdResult<StartSessionReply>;

    /// Terminate a session
    ///
    /// # Returns
    /// The status string reported by the device
    fn terminate_session(&mut self, session_id: &str) -> MfdResult<String>;

    /// Search for objects and return the selected properties of each match
    fn search_objects(
        &mut self,
        session_id: &str,
        request: &SearchRequest,
    ) -> MfdResult<Vec<PropertyList>>;

    /// Fetch the given properties of several objects in one call
    ///
    /// Rows come back in the order the device chooses.
    fn get_objects_props(
        &mut self,
        session_id: &str,
        object_ids: &[EntryId],
        props: &[String],
    ) -> MfdResult<Vec<PropertyList>>;
}

/// Factory binding a [`DirectoryClient`] to a hostname
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Connector: Send + Sync {
    /// Create a client for the device at `hostname`
    ///
    /// # Errors
    /// Returns `ConnectionFailure` if a client cannot be created at all
    fn connect(&self, hostname: &str) -> MfdResult<Box<dyn DirectoryClient>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfd_core::{ErrorKind, MfdError};

    #[test]
    fn test_mock_connector_hands_out_client() {
        let mut connector = MockConnector::new();
        connector.expect_connect().returning(|hostname| {
            let mut client = MockDirectoryClient::new();
            let endpoint = crate::endpoint_for(hostname);
            client.expect_endpoint().return_const(endpoint);
            client.expect_get_protocol_version().returning(|| Ok(303));
            Ok(Box::new(client))
        });

        let mut client = connector.connect("mfd.local").unwrap();
        assert_eq!(client.endpoint(), "http://mfd.local/DH/udirectory");
        assert_eq!(client.get_protocol_version().unwrap(), 303);
    }

    #[test]
    fn test_mock_connector_failure() {
        let mut connector = MockConnector::new();
        connector
            .expect_connect()
            .returning(|_| Err(MfdError::ConnectionFailure("no route to host".into())));

        let err = connector.connect("mfd.local").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    }
}
