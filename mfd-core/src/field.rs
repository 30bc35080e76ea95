//! Canonical address-book fields

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Backend-independent address-book attribute
///
/// Backends translate their native attribute names into this set through a
/// [`FieldMapper`](crate::FieldMapper). New variants may be added here; a
/// backend never invents its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CanonicalField {
    Id,
    Name,
    EmailAddress,
}

impl CanonicalField {
    /// Every canonical field, in declaration order
    pub const ALL: [CanonicalField; 3] = [
        CanonicalField::Id,
        CanonicalField::Name,
        CanonicalField::EmailAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Id => "id",
            CanonicalField::Name => "name",
            CanonicalField::EmailAddress => "email",
        }
    }
}

impl Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values of one entry; a key is present only if the backend mapped it
pub type FieldMap = BTreeMap<CanonicalField, String>;
