//! Transport contract for multi-function device directory services
//!
//! This crate describes the synchronous request/response client the rest of
//! the workspace talks to. The wire encoding of the vendor protocol lives
//! behind [`DirectoryClient`]; callers plug in a concrete client through a
//! [`Connector`].
//!
//! Enable the `mock` feature to get `MockDirectoryClient` and
//! `MockConnector` for tests in downstream crates.

pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod types;

pub use client::{Connector, DirectoryClient};
#[cfg(any(test, feature = "mock"))]
pub use client::{MockConnector, MockDirectoryClient};
pub use credentials::SessionCredentials;
pub use endpoint::{UDIRECTORY_PATH, endpoint_for, lock_mode};
pub use mfd_core::{MfdError, MfdResult};
pub use types::{Property, PropertyList, STATUS_OK, SearchRequest, StartSessionReply};
