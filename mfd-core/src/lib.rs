//! Core types and utilities for multi-function device management
//!
//! This crate provides fundamental types, error handling, and the canonical
//! address-book field schema used throughout the workspace.

pub mod entry;
pub mod error;
pub mod field;
pub mod mapper;
pub mod session;

pub use entry::{AddressBookEntry, EntryId};
pub use error::{ErrorKind, MfdError, MfdResult};
pub use field::{CanonicalField, FieldMap};
pub use mapper::FieldMapper;
pub use session::SessionType;
