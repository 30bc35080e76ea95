//! Address book capability

use mfd_core::{AddressBookEntry, EntryId, FieldMap, MfdError, MfdResult};

/// Normalized view of a device's directory entries
///
/// Read operations need at least a `Shared` session, write operations an
/// `Exclusive` one. Without it they fail with `SessionUnavailable`; the
/// session is never opened or upgraded implicitly.
///
/// Operations a backend has not built fail with `NotImplemented`.
pub trait AddressBook {
    /// Get the ids of all entries
    ///
    /// The first call queries the device; later calls return the cached
    /// list until [`invalidate_entry_ids`](Self::invalidate_entry_ids) is
    /// called. Entries added or removed on the device meanwhile are not
    /// noticed.
    fn entry_ids(&mut self) -> MfdResult<Vec<EntryId>>;

    /// Fetch several entries in one round trip
    ///
    /// Entries come back in the order the device returns them, which need
    /// not match `ids`. The call fails as a whole or returns every row.
    fn entries(&mut self, ids: &[EntryId]) -> MfdResult<Vec<AddressBookEntry>>;

    /// Drop the cached entry id list
    fn invalidate_entry_ids(&mut self);

    /// Fetch a single entry
    fn entry(&mut self, _id: &str) -> MfdResult<AddressBookEntry> {
        Err(MfdError::NotImplemented("getEntry"))
    }

    /// Replace field values of an entry
    fn set_entry(&mut self, _id: &str, _fields: &FieldMap) -> MfdResult<()> {
        Err(MfdError::NotImplemented("setEntry"))
    }

    /// Create an empty entry and return its id
    fn create_entry(&mut self) -> MfdResult<EntryId> {
        Err(MfdError::NotImplemented("createEntry"))
    }
}
