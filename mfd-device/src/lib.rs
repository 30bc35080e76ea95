//! Device abstraction for multi-function devices
//!
//! # Architecture
//!
//! ```text
//! Manager ── ordered DeviceType registry, autodetection
//!    │
//!    ▼
//! DeviceType ── probe (is_instance) and factory (open) for one protocol
//!    │
//!    ▼
//! Device ── owns the SessionController and connection to one host
//!    │
//!    ▼
//! AddressBook ── optional capability borrowed from the Device
//! ```
//!
//! Backends are compiled in and registered when the [`Manager`] is built;
//! there is no runtime plugin loading.

pub mod address_book;
pub mod certainty;
pub mod config;
pub mod descriptor;
pub mod device;
pub mod device_type;
pub mod manager;
pub mod ricoh;

pub use address_book::AddressBook;
pub use certainty::Certainty;
pub use config::{DeviceConfig, DeviceConfigBuilder};
pub use descriptor::DeviceTypeDescriptor;
pub use device::Device;
pub use device_type::DeviceType;
pub use manager::Manager;
pub use mfd_core::{
    AddressBookEntry, CanonicalField, EntryId, ErrorKind, FieldMap, FieldMapper, MfdError,
    MfdResult, SessionType,
};
pub use mfd_session::SessionOutcome;
