//! Address-book entries

use crate::field::{CanonicalField, FieldMap};
use serde::{Deserialize, Serialize};

/// Opaque address-book entry identifier
///
/// The format is backend-specific. Callers must not parse it.
pub type EntryId = String;

/// One address-book entry as seen through the canonical schema
///
/// Entries are built fresh for every query and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub id: EntryId,
    pub fields: FieldMap,
}

impl AddressBookEntry {
    pub fn new(id: impl Into<EntryId>, fields: FieldMap) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Get the value of a canonical field, if the backend mapped it
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
