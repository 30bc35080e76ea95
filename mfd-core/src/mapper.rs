//! Vendor attribute name to canonical field translation

use crate::field::{CanonicalField, FieldMap};

/// Static translation table between one backend's attribute names and
/// [`CanonicalField`]
///
/// A mapper is built once with its backend and never changes afterwards.
/// Vendor attributes missing from the table are dropped when mapping a row.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapper {
    table: &'static [(&'static str, CanonicalField)],
}

impl FieldMapper {
    /// Create a mapper over a `(vendor name, canonical field)` table
    pub const fn new(table: &'static [(&'static str, CanonicalField)]) -> Self {
        Self { table }
    }

    /// Look up the canonical field for a vendor attribute name
    pub fn canonical(&self, vendor_name: &str) -> Option<CanonicalField> {
        self.table
            .iter()
            .find(|(name, _)| *name == vendor_name)
            .map(|(_, field)| *field)
    }

    /// Look up the vendor attribute name for a canonical field
    pub fn vendor_name(&self, field: CanonicalField) -> Option<&'static str> {
        self.table
            .iter()
            .find(|(_, mapped)| *mapped == field)
            .map(|(name, _)| *name)
    }

    /// Vendor attribute names this mapper knows about
    pub fn vendor_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.iter().map(|(name, _)| *name)
    }

    /// Build a field map from one row of `(vendor name, value)` pairs
    ///
    /// If a row repeats a vendor attribute the last value wins.
    pub fn map_row<'a, I>(&self, row: I) -> FieldMap
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut fields = FieldMap::new();
        for (name, value) in row {
            if let Some(field) = self.canonical(name) {
                fields.insert(field, value.to_string());
            }
        }
        fields
    }

    /// Translate canonical field values back into vendor attributes
    ///
    /// # Returns
    /// `(vendor name, value)` pairs, or the first field this backend has no
    /// vendor attribute for
    pub fn to_vendor(
        &self,
        fields: &FieldMap,
    ) -> Result<Vec<(&'static str, String)>, CanonicalField> {
        fields
            .iter()
            .map(|(field, value)| {
                self.vendor_name(*field)
                    .map(|name| (name, value.clone()))
                    .ok_or(*field)
            })
            .collect()
    }
}
