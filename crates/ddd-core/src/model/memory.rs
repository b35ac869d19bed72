//! Vector-backed model without persistence.

use jiff::Timestamp;
use log::debug;

use super::{build_displayed_list, DisplayedRef, Model};
use crate::{
    error::{AddressBookError, Result},
    models::{Contact, DisplayFilter, Displayable, Event, Index, ItemKind, NewContact, NewEvent},
};

/// Model keeping everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    contacts: Vec<Contact>,
    events: Vec<Event>,
    displayed: Vec<DisplayedRef>,
    next_contact_id: u64,
    next_event_id: u64,
}

impl InMemoryModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model from existing items, displaying all of them.
    pub fn with_items(contacts: Vec<Contact>, events: Vec<Event>) -> Self {
        let next_contact_id = contacts.iter().map(|c| c.id).max().unwrap_or(0);
        let next_event_id = events.iter().map(|e| e.id).max().unwrap_or(0);
        let mut model = Self {
            contacts,
            events,
            displayed: Vec::new(),
            next_contact_id,
            next_event_id,
        };
        model.show_all();
        model
    }

    /// Replaces the displayed list with exactly these items, in this order.
    ///
    /// Items do not have to be stored, which lets tests build snapshots that
    /// point at missing entries.
    pub fn set_displayed(&mut self, items: &[Displayable]) {
        self.displayed = items.iter().map(DisplayedRef::from).collect();
    }

    fn show_all(&mut self) {
        self.displayed = build_displayed_list(
            self.contacts.clone(),
            self.events.clone(),
            &DisplayFilter::show_all(),
        )
        .iter()
        .map(DisplayedRef::from)
        .collect();
    }

    fn resolve(&self, entry: &DisplayedRef) -> Option<Displayable> {
        match entry.kind {
            ItemKind::Contact => self
                .contacts
                .iter()
                .find(|c| c.id == entry.id)
                .cloned()
                .map(Displayable::from),
            ItemKind::Event => self
                .events
                .iter()
                .find(|e| e.id == entry.id)
                .cloned()
                .map(Displayable::from),
        }
    }

    fn forget_displayed(&mut self, kind: ItemKind, id: u64) {
        self.displayed.retain(|d| !(d.kind == kind && d.id == id));
    }
}

impl Model for InMemoryModel {
    fn contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn add_contact(&mut self, contact: NewContact) -> Result<Contact> {
        self.next_contact_id += 1;
        let contact = Contact {
            id: self.next_contact_id,
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
            address: contact.address,
            tags: contact.tags,
            created_at: Timestamp::now(),
        };
        self.contacts.push(contact.clone());
        self.show_all();
        Ok(contact)
    }

    fn add_event(&mut self, event: NewEvent) -> Result<Event> {
        self.next_event_id += 1;
        let event = Event {
            id: self.next_event_id,
            name: event.name,
            description: event.description,
            date: event.date,
            contact_ids: event.contact_ids,
            created_at: Timestamp::now(),
        };
        self.events.push(event.clone());
        self.show_all();
        Ok(event)
    }

    fn displayed_list(&self) -> Result<Vec<Displayable>> {
        self.displayed
            .iter()
            .map(|entry| self.resolve(entry).ok_or(AddressBookError::UnknownItem))
            .collect()
    }

    fn displayed_len(&self) -> Result<usize> {
        Ok(self.displayed.len())
    }

    fn displayed_item(&self, index: Index) -> Result<Displayable> {
        let entry = self
            .displayed
            .get(index.zero_based())
            .ok_or(AddressBookError::DisplayedIndexTooLarge)?;
        self.resolve(entry).ok_or(AddressBookError::UnknownItem)
    }

    fn update_displayed_list(&mut self, filter: &DisplayFilter) -> Result<usize> {
        self.displayed = build_displayed_list(self.contacts.clone(), self.events.clone(), filter)
            .iter()
            .map(DisplayedRef::from)
            .collect();
        Ok(self.displayed.len())
    }

    fn delete_contact(&mut self, contact: &Contact) -> Result<()> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.id == contact.id)
            .ok_or(AddressBookError::ContactNotFound { id: contact.id })?;

        self.contacts.remove(position);
        for event in &mut self.events {
            event.contact_ids.retain(|id| *id != contact.id);
        }
        self.forget_displayed(ItemKind::Contact, contact.id);
        debug!("Deleted contact {} from memory", contact.id);
        Ok(())
    }

    fn delete_event(&mut self, event: &Event) -> Result<()> {
        let position = self
            .events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or(AddressBookError::EventNotFound { id: event.id })?;

        self.events.remove(position);
        self.forget_displayed(ItemKind::Event, event.id);
        debug!("Deleted event {} from memory", event.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn new_event(name: &str, contact_ids: Vec<u64>) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            description: None,
            date: date(2024, 5, 20),
            contact_ids,
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids_and_shows_all() {
        let mut model = InMemoryModel::new();
        let alice = model.add_contact(new_contact("Alice")).unwrap();
        let bob = model.add_contact(new_contact("Bob")).unwrap();
        let event = model.add_event(new_event("Dinner", vec![alice.id])).unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(event.id, 1);

        let shown = model.displayed_list().unwrap();
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0].name(), "Alice");
        assert_eq!(shown[2].kind(), ItemKind::Event);
    }

    #[test]
    fn test_delete_contact_removes_participation() {
        let mut model = InMemoryModel::new();
        let alice = model.add_contact(new_contact("Alice")).unwrap();
        let bob = model.add_contact(new_contact("Bob")).unwrap();
        model
            .add_event(new_event("Dinner", vec![alice.id, bob.id]))
            .unwrap();

        model.delete_contact(&alice).unwrap();

        let events = model.events().unwrap();
        assert_eq!(events[0].contact_ids, vec![bob.id]);
        assert_eq!(model.contacts().unwrap().len(), 1);
        assert_eq!(model.displayed_list().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_missing_contact_fails() {
        let mut model = InMemoryModel::new();
        let alice = model.add_contact(new_contact("Alice")).unwrap();
        model.delete_contact(&alice).unwrap();

        let err = model.delete_contact(&alice).unwrap_err();
        assert!(matches!(err, AddressBookError::ContactNotFound { id: 1 }));
    }

    #[test]
    fn test_delete_keeps_filtered_view() {
        let mut model = InMemoryModel::new();
        model.add_contact(new_contact("Alice Tan")).unwrap();
        let bob = model.add_contact(new_contact("Bob Tan")).unwrap();
        model.add_contact(new_contact("Carol Lim")).unwrap();

        let shown = model
            .update_displayed_list(&DisplayFilter::with_keywords(
                Default::default(),
                vec!["tan".to_string()],
            ))
            .unwrap();
        assert_eq!(shown, 2);

        model.delete_contact(&bob).unwrap();
        let names: Vec<_> = model
            .displayed_list()
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alice Tan".to_string()]);
    }

    #[test]
    fn test_dangling_snapshot_entry_is_unknown_item() {
        let mut model = InMemoryModel::new();
        let ghost = Contact {
            id: 42,
            name: "Ghost".to_string(),
            phone: None,
            email: None,
            address: None,
            tags: vec![],
            created_at: Timestamp::now(),
        };
        model.set_displayed(&[Displayable::from(ghost)]);

        let err = model.displayed_list().unwrap_err();
        assert!(matches!(err, AddressBookError::UnknownItem));
    }

    #[test]
    fn test_displayed_item_resolves_only_target_entry() {
        let mut model = InMemoryModel::new();
        let alice = model.add_contact(new_contact("Alice")).unwrap();
        let ghost = Contact {
            id: 42,
            name: "Ghost".to_string(),
            phone: None,
            email: None,
            address: None,
            tags: vec![],
            created_at: Timestamp::now(),
        };
        model.set_displayed(&[Displayable::from(alice.clone()), Displayable::from(ghost)]);

        assert_eq!(model.displayed_len().unwrap(), 2);
        let first = model.displayed_item(Index::from_zero_based(0)).unwrap();
        assert_eq!(first, Displayable::from(alice));

        let err = model.displayed_item(Index::from_zero_based(1)).unwrap_err();
        assert!(matches!(err, AddressBookError::UnknownItem));

        let err = model.displayed_item(Index::from_zero_based(2)).unwrap_err();
        assert!(matches!(err, AddressBookError::DisplayedIndexTooLarge));
    }

    #[test]
    fn test_has_contact_ignores_case() {
        let mut model = InMemoryModel::new();
        model.add_contact(new_contact("Alice Tan")).unwrap();
        assert!(model.has_contact("alice tan").unwrap());
        assert!(!model.has_contact("Alice").unwrap());
    }
}
