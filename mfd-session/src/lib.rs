//! Session layer for multi-function devices
//!
//! This crate owns the authenticated session with one device: opening it
//! with a given access level, switching level with a bounded retry, and
//! closing it when the owner goes away.
//!
//! The vendor-specific calls are supplied through [`SessionProtocol`];
//! [`SessionController`] implements the state machine on top of them.

pub mod config;
pub mod controller;
pub mod protocol;
pub mod state;
pub mod statistics;

pub use config::SessionConfig;
pub use controller::SessionController;
pub use mfd_core::{MfdError, MfdResult, SessionType};
#[cfg(any(test, feature = "mock"))]
pub use protocol::MockSessionProtocol;
pub use protocol::SessionProtocol;
pub use state::{SessionOutcome, SessionState};
pub use statistics::SessionStatistics;
