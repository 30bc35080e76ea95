//! Session controller
//!
//! # Lifecycle
//!
//! ```text
//!            open(type) ok                 close()
//!   Closed ------------------> type -------------------> Closed
//!     ^  |                                  |
//!     |  | open(type) rejected              | reopen(other, timeout):
//!     +--+                                  |   close, then open(other)
//!                                           |   up to timeout + 1 times
//! ```
//!
//! Every call blocks on the device. The controller does no locking; callers
//! serialize access to one instance.

use crate::config::SessionConfig;
use crate::protocol::SessionProtocol;
use crate::state::{SessionOutcome, SessionState};
use crate::statistics::SessionStatistics;
use mfd_core::{MfdError, MfdResult, SessionType};
use std::thread;

/// Owner of the authenticated session with one device
///
/// Dropping a controller that holds a session calls [`close`](Self::close)
/// once; a failure there is logged and otherwise ignored.
pub struct SessionController<P: SessionProtocol> {
    protocol: P,
    config: SessionConfig,
    state: SessionState,
    session_id: Option<String>,
    statistics: SessionStatistics,
}

impl<P: SessionProtocol> SessionController<P> {
    /// Create a controller in `Closed` state
    pub fn new(protocol: P, config: SessionConfig) -> Self {
        Self {
            protocol,
            config,
            state: SessionState::Closed,
            session_id: None,
            statistics: SessionStatistics::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session_type(&self) -> Option<SessionType> {
        self.state.session_type()
    }

    /// Id of the held session, if any
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn statistics(&self) -> SessionStatistics {
        self.statistics
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    pub fn protocol_mut(&mut self) -> &mut P {
        &mut self.protocol
    }

    /// Get the session id if the held session is enough for `required`
    ///
    /// Never opens or upgrades a session.
    ///
    /// # Errors
    /// `SessionUnavailable` if no session, or only a weaker one, is held
    pub fn require(&self, required: SessionType) -> MfdResult<&str> {
        match self.session_id.as_deref() {
            Some(id) if self.state.satisfies(required) => Ok(id),
            _ => Err(MfdError::SessionUnavailable {
                required,
                held: self.state.session_type(),
            }),
        }
    }

    /// Open a session of the given type
    ///
    /// # Returns
    /// `Established` on success. `Rejected` if the device refused; the
    /// state stays `Closed`.
    ///
    /// # Errors
    /// - `InvalidData` if a session is already held; use [`reopen`](Self::reopen)
    /// - `ConnectionFailure` / `ProtocolFault` if the request failed
    pub fn open(&mut self, session_type: SessionType) -> MfdResult<SessionOutcome> {
        let target = SessionState::from(session_type);
        if self.state.is_open() {
            return Err(MfdError::InvalidData(format!(
                "{} session already open, cannot open {} session",
                self.state, target
            )));
        }

        self.statistics.open_attempts += 1;
        match self.protocol.start_session(session_type)? {
            Some(id) => {
                log::info!("Opened {} session", session_type);
                log::debug!("Session id is {}", id);
                self.statistics.established += 1;
                self.session_id = Some(id);
                self.state = target;
                Ok(SessionOutcome::Established)
            }
            None => {
                log::warn!(
                    "Device refused {} session (bad credentials or device busy)",
                    session_type
                );
                self.statistics.rejections += 1;
                Ok(SessionOutcome::Rejected)
            }
        }
    }

    /// Switch to a session of the given type, retrying while the device
    /// refuses
    ///
    /// Does nothing if a session of `session_type` is already held.
    /// Otherwise closes the current session, ignoring a close failure, and
    /// attempts to open: once, then up to `timeout_secs` more times with
    /// one `retry_interval` pause before each retry.
    ///
    /// # Returns
    /// `Established` on the first granted attempt, `Rejected` once the
    /// budget is spent. The budget bounds the number of attempts; a slow
    /// device call can still exceed it in wall-clock time.
    ///
    /// # Errors
    /// `ConnectionFailure` / `ProtocolFault` from an attempt abort the loop
    pub fn reopen(
        &mut self,
        session_type: SessionType,
        timeout_secs: u32,
    ) -> MfdResult<SessionOutcome> {
        if self.state == SessionState::from(session_type) {
            return Ok(SessionOutcome::Established);
        }

        if let Err(e) = self.close() {
            log::warn!("Ignoring failure to close session before reopen: {}", e);
        }

        let mut remaining = timeout_secs;
        loop {
            if self.open(session_type)?.is_established() {
                return Ok(SessionOutcome::Established);
            }
            if remaining == 0 {
                return Ok(SessionOutcome::Rejected);
            }
            log::warn!(
                "Unable to open {} session, retrying {} more time(s)",
                session_type,
                remaining
            );
            thread::sleep(self.config.retry_interval);
            remaining -= 1;
        }
    }

    /// Close the session
    ///
    /// The state is `Closed` afterwards whether or not the device accepted
    /// the termination. Without a held session no request is sent.
    ///
    /// # Errors
    /// `ProtocolFault` if the device rejected the termination request
    pub fn close(&mut self) -> MfdResult<()> {
        self.state = SessionState::Closed;
        let Some(id) = self.session_id.take() else {
            return Ok(());
        };

        self.statistics.closes += 1;
        match self.protocol.terminate_session(&id) {
            Ok(()) => {
                log::info!("Closed session {}", id);
                Ok(())
            }
            Err(e) => {
                self.statistics.close_failures += 1;
                Err(e)
            }
        }
    }
}

impl<P: SessionProtocol> Drop for SessionController<P> {
    fn drop(&mut self) {
        if self.state.is_open() {
            if let Err(e) = self.close() {
                log::warn!("Error closing session during teardown: {}", e);
            }
        }
    }
}
