//! [`Model`] implementation backed by SQLite.

use log::debug;

use super::{
    contact_queries, display_queries, display_queries::DisplayedRow, event_queries, Database,
};
use crate::{
    error::{AddressBookError, DatabaseResultExt, Result},
    model::{build_displayed_list, DisplayedRef, Model},
    models::{Contact, DisplayFilter, Displayable, Event, Index, ItemKind, NewContact, NewEvent},
};

impl Database {
    /// Rebuilds the snapshot on an open connection or transaction.
    fn refresh_displayed(
        conn: &rusqlite::Connection,
        filter: &DisplayFilter,
    ) -> Result<usize> {
        let items = build_displayed_list(
            contact_queries::list_contacts(conn)?,
            event_queries::list_events(conn)?,
            filter,
        );
        let entries: Vec<DisplayedRef> = items.iter().map(DisplayedRef::from).collect();
        display_queries::replace_displayed(conn, &entries)?;
        Ok(entries.len())
    }

    /// Looks up the contact or event a snapshot row points at.
    fn resolve_displayed(&self, row: &DisplayedRow) -> Result<Displayable> {
        let kind = row
            .kind
            .parse::<ItemKind>()
            .map_err(|_| AddressBookError::UnknownItem)?;
        let item = match kind {
            ItemKind::Contact => {
                contact_queries::get_contact(&self.connection, row.item_id)?.map(Displayable::from)
            }
            ItemKind::Event => {
                event_queries::get_event(&self.connection, row.item_id)?.map(Displayable::from)
            }
        };
        item.ok_or(AddressBookError::UnknownItem)
    }
}

impl Model for Database {
    fn contacts(&self) -> Result<Vec<Contact>> {
        contact_queries::list_contacts(&self.connection)
    }

    fn events(&self) -> Result<Vec<Event>> {
        event_queries::list_events(&self.connection)
    }

    fn add_contact(&mut self, contact: NewContact) -> Result<Contact> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let contact = contact_queries::insert_contact(&tx, &contact)?;
        Self::refresh_displayed(&tx, &DisplayFilter::show_all())?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Stored contact {}", contact.id);
        Ok(contact)
    }

    fn add_event(&mut self, event: NewEvent) -> Result<Event> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let event = event_queries::insert_event(&tx, &event)?;
        Self::refresh_displayed(&tx, &DisplayFilter::show_all())?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Stored event {}", event.id);
        Ok(event)
    }

    fn displayed_list(&self) -> Result<Vec<Displayable>> {
        display_queries::load_displayed(&self.connection)?
            .into_iter()
            .map(|row| self.resolve_displayed(&row))
            .collect()
    }

    fn displayed_len(&self) -> Result<usize> {
        display_queries::count_displayed(&self.connection)
    }

    fn displayed_item(&self, index: Index) -> Result<Displayable> {
        let row = display_queries::load_displayed_at(&self.connection, index.zero_based())?
            .ok_or(AddressBookError::DisplayedIndexTooLarge)?;
        self.resolve_displayed(&row)
    }

    fn update_displayed_list(&mut self, filter: &DisplayFilter) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let count = Self::refresh_displayed(&tx, filter)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(count)
    }

    fn delete_contact(&mut self, contact: &Contact) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        contact_queries::delete_contact(&tx, contact.id)?;
        display_queries::forget_displayed(&tx, ItemKind::Contact, contact.id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted contact {}", contact.id);
        Ok(())
    }

    fn delete_event(&mut self, event: &Event) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        event_queries::delete_event(&tx, event.id)?;
        display_queries::forget_displayed(&tx, ItemKind::Event, event.id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted event {}", event.id);
        Ok(())
    }
}
