//! Ricoh Aficio backend
//!
//! Ricoh Aficio devices and compatibles expose their address book through
//! the uDirectory service at `http://<host>/DH/udirectory`. The wire
//! encoding of that service is provided by a
//! [`Connector`](mfd_transport::Connector); this module implements the
//! device type, session handling and address-book mapping on top of it.

mod address_book;
mod device;
mod device_type;
mod fields;
mod session;

pub use address_book::UDirectoryAddressBook;
pub use device::RicohAficioDevice;
pub use device_type::{CODE, FRIENDLY_NAME, RicohAficioType};
pub use fields::{ENTRY_ID_PREFIX, ENTRY_PROPS, FIELD_MAPPER, RESERVED_ID_THRESHOLD};
pub use session::UDirectorySession;
