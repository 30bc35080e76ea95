//! uDirectory address book

use super::fields::{ENTRY_CLASS, ENTRY_ID_PREFIX, ENTRY_PROPS, ID_PROP, is_reserved_id};
use super::session::UDirectorySession;
use crate::address_book::AddressBook;
use mfd_core::{AddressBookEntry, EntryId, FieldMapper, MfdResult, SessionType};
use mfd_session::SessionController;
use mfd_transport::SearchRequest;

/// Address book of a [`RicohAficioDevice`](super::RicohAficioDevice)
///
/// Borrows the device's session and id cache for as long as it lives.
pub struct UDirectoryAddressBook<'a> {
    session: &'a mut SessionController<UDirectorySession>,
    entry_ids: &'a mut Option<Vec<EntryId>>,
    mapper: FieldMapper,
    page_size: u32,
}

impl<'a> UDirectoryAddressBook<'a> {
    pub(crate) fn new(
        session: &'a mut SessionController<UDirectorySession>,
        entry_ids: &'a mut Option<Vec<EntryId>>,
        mapper: FieldMapper,
        page_size: u32,
    ) -> Self {
        Self {
            session,
            entry_ids,
            mapper,
            page_size,
        }
    }

    fn query_entry_ids(&mut self, session_id: &str) -> MfdResult<Vec<EntryId>> {
        // TODO: page through the directory once devices with more than
        // page_size entries need to be listed.
        let request = SearchRequest::new(ENTRY_CLASS)
            .select([ID_PROP])
            .page(0, self.page_size);
        let rows = self
            .session
            .protocol_mut()
            .client_mut()
            .search_objects(session_id, &request)?;

        let mut ids = Vec::with_capacity(rows.len());
        for row in &rows {
            let Some(raw) = row.get(ID_PROP) else {
                log::debug!("[udir] Skipping entry row without id");
                continue;
            };
            if is_reserved_id(raw) {
                log::debug!("[udir] Skipping reserved entry {}", raw);
                continue;
            }
            ids.push(format!("{}{}", ENTRY_ID_PREFIX, raw));
        }
        log::debug!("[udir] {} of {} entries listed", ids.len(), rows.len());
        Ok(ids)
    }
}

impl AddressBook for UDirectoryAddressBook<'_> {
    fn entry_ids(&mut self) -> MfdResult<Vec<EntryId>> {
        let session_id = self.session.require(SessionType::Shared)?.to_string();
        if let Some(ids) = self.entry_ids.as_ref() {
            return Ok(ids.clone());
        }

        let ids = self.query_entry_ids(&session_id)?;
        *self.entry_ids = Some(ids.clone());
        Ok(ids)
    }

    fn entries(&mut self, ids: &[EntryId]) -> MfdResult<Vec<AddressBookEntry>> {
        let session_id = self.session.require(SessionType::Shared)?.to_string();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let props: Vec<String> = ENTRY_PROPS.iter().map(|p| p.to_string()).collect();
        let rows = self
            .session
            .protocol_mut()
            .client_mut()
            .get_objects_props(&session_id, ids, &props)?;

        let entries = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let id = match row.get(ID_PROP) {
                    Some(raw) => format!("{}{}", ENTRY_ID_PREFIX, raw),
                    None => ids.get(index).cloned().unwrap_or_default(),
                };
                AddressBookEntry::new(id, self.mapper.map_row(row.pairs()))
            })
            .collect();
        Ok(entries)
    }

    fn invalidate_entry_ids(&mut self) {
        *self.entry_ids = None;
    }
}
