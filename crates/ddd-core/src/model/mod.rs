//! The model consumed by commands.
//!
//! A [`Model`] owns the authoritative contacts and events together with the
//! list of items currently shown to the user. Commands receive the model as
//! `&mut dyn Model`, so the same command code runs against the SQLite-backed
//! [`crate::db::Database`] in the application and against [`InMemoryModel`]
//! in tests.
//!
//! The displayed list is a snapshot: it only changes when a list, find or
//! add operation rebuilds it, or when a delete prunes the removed item.

use crate::{
    error::Result,
    models::{Contact, DisplayFilter, Displayable, Event, Index, ItemKind, NewContact, NewEvent},
};

pub mod memory;

pub use memory::InMemoryModel;

/// Storage of contacts, events and the displayed list.
pub trait Model {
    /// All stored contacts ordered by ID.
    fn contacts(&self) -> Result<Vec<Contact>>;

    /// All stored events ordered by ID.
    fn events(&self) -> Result<Vec<Event>>;

    /// Stores a validated contact and resets the displayed list to show
    /// every item.
    fn add_contact(&mut self, contact: NewContact) -> Result<Contact>;

    /// Stores a validated event and resets the displayed list to show every
    /// item. Referenced contacts are expected to exist.
    fn add_event(&mut self, event: NewEvent) -> Result<Event>;

    /// Items currently shown to the user, in display order.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::UnknownItem` when an entry of the snapshot
    /// cannot be resolved to a stored contact or event.
    fn displayed_list(&self) -> Result<Vec<Displayable>>;

    /// Number of entries in the displayed list, resolvable or not.
    fn displayed_len(&self) -> Result<usize>;

    /// The item shown at `index`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DisplayedIndexTooLarge` past the end of the
    /// list and `AddressBookError::UnknownItem` when this entry cannot be
    /// resolved. Other entries are not looked at.
    fn displayed_item(&self, index: Index) -> Result<Displayable>;

    /// Rebuilds the displayed list from the items matching `filter` and
    /// returns its new length.
    fn update_displayed_list(&mut self, filter: &DisplayFilter) -> Result<usize>;

    /// Removes a contact, its event participations and its displayed entry.
    fn delete_contact(&mut self, contact: &Contact) -> Result<()>;

    /// Removes an event and its displayed entry.
    fn delete_event(&mut self, event: &Event) -> Result<()>;

    /// Whether a contact with this name exists, ignoring case.
    fn has_contact(&self, name: &str) -> Result<bool> {
        Ok(self.contacts()?.iter().any(|c| c.is_same_contact(name)))
    }
}

/// Orders and filters items into a displayed list.
///
/// Contacts come first by ID, then events by date and ID.
pub fn build_displayed_list(
    mut contacts: Vec<Contact>,
    mut events: Vec<Event>,
    filter: &DisplayFilter,
) -> Vec<Displayable> {
    contacts.sort_by_key(|c| c.id);
    events.sort_by_key(|e| (e.date, e.id));

    contacts
        .into_iter()
        .map(Displayable::from)
        .chain(events.into_iter().map(Displayable::from))
        .filter(|item| filter.matches(item))
        .collect()
}

/// Reference to a displayed item, as kept in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedRef {
    pub kind: ItemKind,
    pub id: u64,
}

impl From<&Displayable> for DisplayedRef {
    fn from(item: &Displayable) -> Self {
        Self {
            kind: item.kind(),
            id: item.id(),
        }
    }
}
