//! uDirectory session hooks

use mfd_core::{MfdResult, SessionType};
use mfd_session::SessionProtocol;
use mfd_transport::{DirectoryClient, SessionCredentials, lock_mode};

/// [`SessionProtocol`] over a uDirectory client
///
/// Owns the client for its device, so every directory call goes through
/// here once the session is up.
pub struct UDirectorySession {
    client: Box<dyn DirectoryClient>,
    credentials: SessionCredentials,
    timeout_secs: u32,
}

impl UDirectorySession {
    pub fn new(
        client: Box<dyn DirectoryClient>,
        credentials: SessionCredentials,
        timeout_secs: u32,
    ) -> Self {
        Self {
            client,
            credentials,
            timeout_secs,
        }
    }

    pub fn client_mut(&mut self) -> &mut dyn DirectoryClient {
        self.client.as_mut()
    }
}

impl SessionProtocol for UDirectorySession {
    fn start_session(&mut self, session_type: SessionType) -> MfdResult<Option<String>> {
        let reply = self.client.start_session(
            &self.credentials.to_session_info(),
            self.timeout_secs,
            lock_mode(session_type),
        )?;
        log::info!("[udir] Open session as {}: {}", self.credentials.username(), reply.status);

        if reply.is_granted() {
            Ok(Some(reply.session_id))
        } else {
            Ok(None)
        }
    }

    fn terminate_session(&mut self, session_id: &str) -> MfdResult<()> {
        let status = self.client.terminate_session(session_id)?;
        log::info!("[udir] Close session: {}", status);
        Ok(())
    }
}
